use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(ends_with, [
    subject => Required(Of(DataType::String)),
    suffix => Required(Of(DataType::String))
    ], |_: &ends_with, args: &Vec<Value>, _: &dyn FunctionContext| {
        let subject: Vec<_> = args[0].as_str().unwrap().chars().collect();
        let suffix: Vec<_> = args[1].as_str().unwrap().chars().collect();
        let ends_with = subject.ends_with(&suffix);
        Ok(Value::Boolean(ends_with))
});

use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(not_null, [
    first => Required(Of(DataType::Any)),
    rest => Variadic(Of(DataType::Any))
    ], |_: &not_null, args: &Vec<Value>, _: &dyn FunctionContext| {
        let result = args.iter().find(|x| !x.is_null()).cloned().unwrap_or(Value::Null);
        Ok(result)
    }
);

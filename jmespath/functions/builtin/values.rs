use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(values, [ obj => Required(Of(DataType::Object)) ], |_: &values, args: &Vec<Value>, _: &dyn FunctionContext| {
    let obj = args[0].as_object().unwrap();
    let array: Vec<_> = obj.iter().map(|item| item.1.clone()).collect();

    Ok(Value::Array(array))
});

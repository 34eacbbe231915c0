use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

use crate::function;

function!(keys, [ obj => Required(Of(DataType::Object)) ], |_: &keys, args: &Vec<Value>, _: &dyn FunctionContext| {
    let obj = args[0].as_object().unwrap();
    let array: Vec<_> = obj.iter().map(|item| Value::String(item.0.to_string())).collect();

    Ok(Value::Array(array))
});

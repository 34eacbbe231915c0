use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_array, [ subject => Required(Of(DataType::Any)) ], |_: &to_array, args: &Vec<Value>, _: &dyn FunctionContext| {
    let value = &args[0];
    let result = if value.is_array() {
        value.clone()
    } else {
        Value::Array(vec![value.clone()])
    };
    Ok(result)
});

use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_string, [ subject => Required(Of(DataType::Any)) ], |_: &to_string, args: &Vec<Value>, _: &dyn FunctionContext| {
    let value = &args[0];
    let result = match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_json(),
    };
    Ok(Value::String(result))
});

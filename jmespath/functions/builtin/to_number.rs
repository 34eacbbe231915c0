use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_number, [ subject => Required(Of(DataType::Any)) ], |_: &to_number, args: &Vec<Value>, _: &dyn FunctionContext| {
    let result = match &args[0] {
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => match s.parse::<f64>() {
            Ok(f) => Value::from_f64(f)?,
            Err(_) => Value::Null,
        },
        _ => Value::Null,
    };
    Ok(result)
});

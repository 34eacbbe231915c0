use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;
use crate::utils::Number;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(abs, [ subject => Required(Of(DataType::Number)) ], |_: &abs, args: &Vec<Value>, _: &dyn FunctionContext| {
    let number = args[0].as_number().unwrap();
    if number.is_integer() {
        Ok(Value::Number(Number::from_integer(number.number.abs() as i64)))
    } else {
        Value::from_f64(number.number.abs())
    }
});

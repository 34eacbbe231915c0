use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(sum, [ subject => Required(Of(DataType::Array)) ], |_: &sum, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();
    let numbers = array.iter().filter_map(|x| x.as_f64()).collect::<Vec<f64>>();

    if numbers.len() != array.len() {
        Ok(Value::Null)
    }
    else {
        let sum: f64 = numbers.iter().sum();
        Value::from_f64(sum)
    }
});

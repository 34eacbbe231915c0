use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::errors::Error as RuntimeError;
use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(max, [ subject => Required(Of(DataType::Array)) ], |me: &max, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();

    if array.is_empty() {
        return Ok(Value::Null);
    }

    if array.iter().all(|x| x.is_number()) {
        let max = array.iter().map(|x| x.as_number().unwrap()).max().unwrap();
        return Ok(Value::Number(*max));
    }

    if array.iter().all(|x| x.is_str()) {
        let max = array.iter().map(|x| x.as_str().unwrap()).max().unwrap();
        return Ok(Value::String(max.to_string()));
    }

    let mismatch = array
        .iter()
        .find(|x| !x.is_number() && !x.is_str())
        .unwrap();

    Err(RuntimeError::get_invalid_type_error_builder()
        .for_function(me.get_name())
        .for_parameter(&me.get_parameter_name(0))
        .expected_data_types(&vec![DataType::Number, DataType::String])
        .received(mismatch)
        .build())
});

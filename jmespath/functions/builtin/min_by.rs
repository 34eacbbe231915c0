use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::errors::Error as RuntimeError;
use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(min_by, [
    elements => Required(Of(DataType::Array)),
    expr => Required(Of(DataType::ExpRef))
    ], |me: &min_by, args: &Vec<Value>, context: &dyn FunctionContext| {

        let array = args[0].as_array().unwrap();
        let ast = args[1].as_expref().unwrap();

        let params = vec![Any(vec![DataType::Number, DataType::String])];
        let closure = context.create_by_function(&ast, &params, me, 1).unwrap();

        let keys = array
            .iter()
            .map(|x| closure(x))
            .collect::<Result<Vec<Value>, RuntimeError>>()?;

        if keys.is_empty() {
            return Ok(Value::Null);
        }

        let first_type = keys[0].get_data_type();
        if let Some(mismatch) = keys.iter().find(|k| k.get_data_type() != first_type) {
            return Err(RuntimeError::get_invalid_type_error_builder()
                .for_function(me.get_name())
                .for_expression_parameter(&me.get_parameter_name(1))
                .expected_data_types(&vec![first_type])
                .received(mismatch)
                .build());
        }

        let selected = match first_type {
            DataType::Number => array
                .iter()
                .zip(keys.iter().map(|k| k.as_number().unwrap()))
                .min_by_key(|(_, k)| *k),
            DataType::String => array
                .iter()
                .zip(keys.iter().map(|k| k.as_str().unwrap()))
                .min_by_key(|(_, k)| *k),
            _ => unreachable!(),
        };

        Ok(selected.map(|(v, _)| v.clone()).unwrap_or(Value::Null))
    }
);

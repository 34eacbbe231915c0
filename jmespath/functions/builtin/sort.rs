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

function!(sort, [ subject => Required(Of(DataType::Array)) ], |me: &sort, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();

    if array.is_empty() {
        return Ok(Value::Array(vec![]));
    }

    let first_type = array[0].get_data_type();
    if let Some(mismatch) = array.iter().find(|x| x.get_data_type() != first_type) {
        return Err(RuntimeError::get_invalid_type_error_builder()
            .for_function(me.get_name())
            .for_parameter(&me.get_parameter_name(0))
            .expected_data_types(&vec![first_type])
            .received(mismatch)
            .build());
    }

    let mut sorted = array.clone();
    match first_type {
        DataType::Number => {
            sorted.sort_by(|a, b| a.as_number().unwrap().cmp(b.as_number().unwrap()))
        }
        DataType::String => sorted.sort_by(|a, b| a.as_str().unwrap().cmp(b.as_str().unwrap())),
        _ => {
            return Err(RuntimeError::get_invalid_type_error_builder()
                .for_function(me.get_name())
                .for_parameter(&me.get_parameter_name(0))
                .expected_data_types(&vec![DataType::Number, DataType::String])
                .received(&array[0])
                .build())
        }
    }

    Ok(Value::Array(sorted))
});

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(vec![1, 2, 3].into(), vec![3, 1, 2].into())]
    #[case(vec!["a", "b", "c"].into(), vec!["c", "a", "b"].into())]
    #[case(Value::Array(vec![]), Value::Array(vec![]))]
    fn sort(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "sort";
        let args = vec![input];
        let result = fixture.runtime.call(fname, &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn sort_rejects_mixed_types() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "sort";
        let args = vec![Value::Array(vec![1.into(), "a".into()])];
        let result = fixture.runtime.call(fname, &args, context);

        assert!(result.is_err());
    }
}

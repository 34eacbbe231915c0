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

function!(min, [ subject => Required(Of(DataType::Array)) ], |me: &min, args: &Vec<Value>, _: &dyn FunctionContext| {
    let array = args[0].as_array().unwrap();

    if array.is_empty() {
        return Ok(Value::Null);
    }

    if array.iter().all(|x| x.is_number()) {
        let min = array.iter().map(|x| x.as_number().unwrap()).min().unwrap();
        return Ok(Value::Number(*min));
    }

    if array.iter().all(|x| x.is_str()) {
        let min = array.iter().map(|x| x.as_str().unwrap()).min().unwrap();
        return Ok(Value::String(min.to_string()));
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

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(1.into(), vec![3, 1, 2].into())]
    #[case("a".into(), vec!["c", "a", "b"].into())]
    #[case(Value::Null, Value::Array(vec![]))]
    fn min(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "min";
        let args = vec![input];
        let result = fixture.runtime.call(fname, &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn min_rejects_mixed_types() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "min";
        let args = vec![Value::Array(vec![1.into(), "a".into()])];
        let result = fixture.runtime.call(fname, &args, context);

        assert!(result.is_err());
    }
}

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

function!(join, [
    glue => Required(Of(DataType::String)),
    arr => Required(Of(DataType::Array))
    ], |me: &join, args: &Vec<Value>, _: &dyn FunctionContext| {
        let glue = args[0].as_str().unwrap();
        let array = args[1].as_array().unwrap();

        let mut parts: Vec<&str> = Vec::with_capacity(array.len());
        for item in array {
            match item.as_str() {
                Some(s) => parts.push(s),
                None => {
                    return Err(RuntimeError::get_invalid_type_error_builder()
                        .for_function(me.get_name())
                        .for_parameter(&me.get_parameter_name(1))
                        .expected_data_types(&vec![DataType::String])
                        .received(item)
                        .build());
                }
            }
        }

        Ok(Value::String(parts.join(glue)))
    }
);

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case("a, b, c".into(), ", ".into(), vec!["a", "b", "c"].into())]
    #[case("".into(), ", ".into(), Value::Array(vec![]))]
    fn join(#[case] expected: Value, #[case] glue: Value, #[case] array: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "join";
        let args = vec![glue, array];
        let result = fixture.runtime.call(fname, &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn join_rejects_non_string_elements() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let fname = "join";
        let args = vec![", ".into(), Value::Array(vec!["a".into(), 1.into()])];
        let result = fixture.runtime.call(fname, &args, context);

        assert!(result.is_err());
    }
}

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

function!(sort_by, [
    elements => Required(Of(DataType::Array)),
    expr => Required(Of(DataType::ExpRef))
    ], |me: &sort_by, args: &Vec<Value>, context: &dyn FunctionContext| {

        let array = args[0].as_array().unwrap();
        let ast = args[1].as_expref().unwrap();

        let params = vec![Any(vec![DataType::Number, DataType::String])];
        let closure = context.create_by_function(&ast, &params, me, 1).unwrap();

        let keys = array
            .iter()
            .map(|x| closure(x))
            .collect::<Result<Vec<Value>, RuntimeError>>()?;

        if keys.is_empty() {
            return Ok(Value::Array(vec![]));
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

        let mut pairs: Vec<(&Value, &Value)> = array.iter().zip(keys.iter()).collect();
        match first_type {
            DataType::Number => pairs.sort_by(|a, b| {
                a.1.as_number().unwrap().cmp(b.1.as_number().unwrap())
            }),
            DataType::String => {
                pairs.sort_by(|a, b| a.1.as_str().unwrap().cmp(b.1.as_str().unwrap()))
            }
            _ => unreachable!(),
        }

        Ok(Value::Array(pairs.into_iter().map(|(v, _)| v.clone()).collect()))
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Position;
    use crate::ByFunctionHolder;
    use crate::NodeType;
    use crate::Runtime;
    use crate::AST;
    use rstest::*;

    struct Fixture {
        runtime: Runtime,
    }
    impl FunctionContext for Fixture {
        fn create_by_function<'a>(
            &'a self,
            _ast: &'a crate::AST,
            _params: &'a Vec<crate::functions::ParamTypes>,
            _function: &'a dyn Function,
            _param_index: usize,
        ) -> Result<crate::ByFunctionHolder<'a>, RuntimeError> {
            let closure = |x: &Value| Ok(x.clone());
            Ok(ByFunctionHolder {
                closure: Box::new(closure),
            })
        }
    }

    fn setup() -> Fixture {
        let runtime = Runtime::create_runtime();
        Fixture { runtime }
    }

    #[rstest]
    #[case(Value::Array(vec![1.into(), 2.into(), 3.into()]), Value::Array(vec![3.into(), 1.into(), 2.into()]))]
    #[case(Value::Array(vec![]), Value::Array(vec![]))]
    fn sort_by(#[case] expected: Value, #[case] input: Value) {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let identifier = AST::make(NodeType::CurrentNode, Position::new(1, 2));
        let expression = AST::make(NodeType::Expression(vec![identifier]), Position::new(1, 1));
        let expref = Value::Expression(expression);

        let fname = "sort_by";
        let args = vec![input, expref];
        let result = fixture.runtime.call(fname, &args, context).unwrap();

        assert_eq!(expected, result);
    }
}

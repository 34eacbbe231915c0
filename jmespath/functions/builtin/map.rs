use crate::errors::Error as RuntimeError;
use crate::function;

use crate::functions::ReturnValue;
use crate::FunctionContext;
use crate::Value;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(map, [
    expr => Required(Of(DataType::ExpRef)),
    elements => Required(Of(DataType::Array))
    ], |me: &map, args: &Vec<Value>, context: &dyn FunctionContext| {

        let ast = args[0].as_expref().unwrap();
        let array = args[1].as_array().unwrap();

        let params = vec![Of(DataType::Any)];
        let closure = context.create_by_function(&ast, &params, me, 0).unwrap();

        let values = array
            .iter()
            .map(|x| closure(x))
            .collect::<Result<Vec<Value>, RuntimeError>>()?;

        Ok(Value::Array(values))
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
    #[case(Value::Array(vec![1.into(), 2.into(), 3.into()]), Value::Array(vec![1.into(), 2.into(), 3.into()]))]
    #[case(Value::Array(vec![]), Value::Array(vec![]))]
    fn map(#[case] expected: Value, #[case] input: Value) {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let identifier = AST::make(NodeType::CurrentNode, Position::new(1, 2));
        let expression = AST::make(NodeType::Expression(vec![identifier]), Position::new(1, 1));
        let expref = Value::Expression(expression);

        let fname = "map";
        let args = vec![expref, input];
        let result = fixture.runtime.call(fname, &args, context).unwrap();

        assert_eq!(expected, result);
    }
}

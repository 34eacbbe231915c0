use crate::functions::{DataType, Function, ParamTypes, Parameter, ReturnValue};
use crate::{FunctionContext, Value};

/// Implements the builtin `type` function.
///
/// Named `type_` because `type` is a reserved word in Rust; the
/// function is registered under its proper JMESPath name, `"type"`,
/// via [`Function::get_name`].
#[allow(non_camel_case_types)]
pub struct type_ {
    signature: Vec<Parameter>,
}
impl type_ {
    pub fn new() -> Self {
        type_ {
            signature: vec![Parameter::Required(ParamTypes::Of(DataType::Any))],
        }
    }
}
impl Function for type_ {
    fn get_name(&self) -> &str {
        "type"
    }
    fn get_signature(&self) -> &Vec<Parameter> {
        &self.signature
    }
    fn execute(&self, args: &Vec<Value>, _context: &dyn FunctionContext) -> ReturnValue {
        let name = match &args[0] {
            Value::Array(_) => "array",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Object(_) => "object",
            Value::String(_) => "string",
            Value::Expression(_) => "expref",
        };
        Ok(Value::String(name.to_string()))
    }
    fn get_parameter_name(&self, _index: usize) -> String {
        "subject".to_string()
    }
}

use crate::Value;

pub trait ValueOption {
    fn or_null(self) -> Value;
}
impl ValueOption for Option<Value> {
    fn or_null(self) -> Value {
        self.unwrap_or_else(|| Value::Null)
    }
}

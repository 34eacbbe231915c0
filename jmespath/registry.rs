use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::runtime::FunctionRegistrar;
use crate::JmesPathFunction;

lazy_static! {
    pub static ref REGISTRY: Box<Registry> = Box::new(Registry::create_registry());
}
pub struct Registry {
    functions: HashMap<String, Box<JmesPathFunction>>,
}
macro_rules! register {
    ($expr:expr, $ident:ident) => {
        $expr.register(Box::new(crate::functions::builtin::$ident::$ident::new()));
    };
}
impl Registry {
    fn new() -> Self {
        Registry {
            functions: HashMap::new(),
        }
    }
    pub(crate) fn create_registry() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_functions();
        registry
    }
    fn register_builtin_functions(&mut self) {
        register!(self, abs);
        register!(self, avg);
        register!(self, ceil);
        register!(self, contains);
        register!(self, ends_with);
        register!(self, floor);
        register!(self, join);
        register!(self, keys);
        register!(self, length);
        register!(self, map);
        register!(self, max);
        register!(self, max_by);
        register!(self, merge);
        register!(self, min);
        register!(self, min_by);
        register!(self, not_null);
        register!(self, reverse);
        register!(self, sort);
        register!(self, sort_by);
        register!(self, starts_with);
        register!(self, sum);
        register!(self, to_array);
        register!(self, to_number);
        register!(self, to_string);
        register!(self, type_);
        register!(self, values);
    }
}
impl FunctionRegistrar for Registry {
    fn register(&mut self, func: Box<JmesPathFunction>) {
        let name = func.get_name().to_string();
        self.functions.insert(name, func);
    }
    fn get(&self, function_name: &str) -> Option<&Box<JmesPathFunction>> {
        self.functions.get(function_name)
    }
}

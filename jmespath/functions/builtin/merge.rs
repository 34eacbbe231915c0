use crate::function;

use crate::FunctionContext;
use crate::Map;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(merge, [ objs => Variadic(Of(DataType::Object)) ], |_: &merge, args: &Vec<Value>, _: &dyn FunctionContext| {
    let mut result: Map<String, Value> = Map::new();
    for arg in args {
        let obj = arg.as_object().unwrap();
        for (key, value) in obj.iter() {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Object(result))
});

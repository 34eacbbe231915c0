use crate::errors::error_builder::{
    ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder, SyntaxErrorBuilder,
};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::errors::syntax::SyntaxErrorBuilderFactory;
use crate::errors::{Error as RuntimeError, Kind, Position};
use crate::functions::{DataType, Function, ParamTypes, ReturnValue};
use crate::parser::{Slice, AST};
use crate::runtime::{ByFunctionHolder, Runtime};
use crate::value_option::ValueOption as _;
use crate::Map;
use crate::Value;
use crate::{FunctionContext, NodeType};

pub struct Interpreter<'a> {
    root: Option<&'a Value>,
    runtime: &'a Runtime,
}
impl<'a> Interpreter<'a> {
    pub fn new(runtime: &'a Runtime, root: &'a Value) -> Self {
        Interpreter {
            root: Some(root),
            runtime,
        }
    }
    pub fn evaluate(&self, ast: &AST) -> ReturnValue {
        self.visit(ast, self.root.unwrap())
    }

    fn visit_raw_string(&self, ast: &AST, _: &Value) -> ReturnValue {
        Ok(ast.raw_string().into())
    }
    fn visit_current_node(&self, _: &AST, value: &Value) -> ReturnValue {
        Ok(value.clone())
    }

    fn visit_quoted_identifier(
        &self,
        ast: &AST,
        value: &Value,
        position: &Position,
    ) -> ReturnValue {
        let identifier = Self::unwrap_quoted_identifier(ast.identifier(), *position)?;
        Ok(match value {
            Value::Expression(_) => unreachable!(),
            Value::Object(v) => {
                if v.contains_key(&identifier) {
                    v[&identifier].clone()
                } else {
                    Value::Null
                }
            }
            _ => Value::Null,
        })
    }

    fn visit_identifier(&self, ast: &AST, value: &Value) -> ReturnValue {
        let identifier = ast.identifier();
        Ok(match value {
            Value::Expression(_) => unreachable!(),
            Value::Object(v) => {
                if v.contains_key(identifier) {
                    v[identifier].clone()
                } else {
                    Value::Null
                }
            }
            _ => Value::Null,
        })
    }

    fn visit_expref(&self, nodes: &Vec<AST>, _: &Value) -> ReturnValue {
        assert_eq!(1, nodes.len());
        Ok(Value::Expression(nodes[0].clone()))
    }

    fn visit_multi_select_hash(&self, map: &Map<String, AST>, value: &Value) -> ReturnValue {
        let mut object: Map<String, Value> = Map::new();
        for item in map {
            // unwrap quoted identifier
            let key = if item.0.starts_with("\"") {
                Self::unwrap_quoted_identifier(&item.0, Position::default())?
            } else {
                item.0.clone()
            };
            let evaluated = self.visit(&item.1, value)?;
            object.insert(key, evaluated);
        }
        Ok(Value::Object(object))
    }

    fn visit_multi_select_list(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let mut array = Vec::new();
        for node in nodes {
            array.push(self.visit(node, value)?);
        }
        Ok(Value::Array(array))
    }

    fn visit_pipe_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        assert_eq!(2, nodes.len());
        let left = self.visit(&nodes[0], value)?;
        self.visit(&nodes[1], &left)
    }
    fn visit_sub_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        assert_eq!(2, nodes.len());
        let left = self.visit(&nodes[0], value)?;
        if let Value::Null = left {
            return Ok(Value::Null);
        }
        self.visit(&nodes[1], &left)
    }

    fn visit_hash_wildcard_projection(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let object = match &nodes[0].node_type {
            NodeType::None => Ok(value.clone()),
            _ => self.visit(&nodes[0], value),
        }?;
        Ok(match object {
            Value::Object(map) => {
                let values = map
                    .values()
                    .filter(|x| !x.is_null())
                    .map(|x| x.clone())
                    .collect::<Vec<Value>>();
                if let NodeType::None = nodes[1].node_type {
                    Value::Array(values)
                } else {
                    let mut result = Vec::new();
                    for item in values {
                        let right = self.visit(&nodes[1], &item)?;
                        if !right.is_null() {
                            result.push(right);
                        }
                    }
                    Value::Array(result)
                }
            }
            _ => Value::Null,
        })
    }
    fn visit_projection(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let left = match &nodes[0].node_type {
            NodeType::Filter(..) => self.filter(nodes, value),
            NodeType::Flatten => self.flatten(&nodes[1], value),
            NodeType::ListWildcard => self.list_wildcard(&nodes[1], value),
            NodeType::Slice(slice) => self.slice(slice, &nodes[1], value, nodes[0].position),
            _ => unreachable!(),
        }?;
        if let NodeType::None = nodes[2].node_type {
            return Ok(left);
        };
        let result = match left {
            Value::Array(array) => {
                let mut result = Vec::new();
                for item in array {
                    let right = self.visit(&nodes[2], &item)?;
                    if !right.is_null() {
                        result.push(right);
                    }
                }
                Value::Array(result)
            }
            Value::String(..) => {
                // a slice projection with a second argument
                // is really a sub-expression in disguise
                self.visit(&nodes[2], &left)?
            }
            _ => Value::Null,
        };
        Ok(result.into())
    }
    fn filter(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let array = match &nodes[1].node_type {
            NodeType::None => Ok(value.clone()),
            _ => self.visit(&nodes[1], value),
        }?;
        Ok(match array {
            Value::Array(array) => {
                let result = match &nodes[0].node_type {
                    NodeType::Filter(ast) => {
                        let mut result = Vec::new();
                        for item in array {
                            let filtered = self.visit(&ast[0], &item)?;
                            if filtered.is_truthy() {
                                result.push(item)
                            }
                        }
                        result
                    }
                    _ => unreachable!(),
                };
                Value::Array(result)
            }
            _ => Value::Null,
        })
    }
    fn flatten(&self, node: &AST, value: &Value) -> ReturnValue {
        // define a local 'flatten_array' function
        fn flatten_array<'b>(array: &Vec<Value>, result: &'b mut Vec<Value>) -> &'b Vec<Value> {
            for item in array {
                if let Value::Array(nested_array) = item {
                    for nested_item in nested_array {
                        result.push(nested_item.clone())
                    }
                } else {
                    result.push(item.clone())
                }
            }
            result
        }
        // flatten the current node
        let array = match &node.node_type {
            NodeType::None => Ok(value.clone()),
            _ => self.visit(node, value),
        }?;
        Ok(match array {
            Value::Array(array) => {
                let mut result: Vec<Value> = Vec::new();
                let flat = flatten_array(&array, &mut result);
                Value::Array(flat.clone())
            }
            _ => Value::Null,
        })
    }
    fn list_wildcard(&self, node: &AST, value: &Value) -> ReturnValue {
        let array: Result<Value, RuntimeError> = if matches!(node.node_type, NodeType::None) {
            Ok(value.clone())
        } else {
            self.visit(node, value)
        };
        Ok(array?.if_array().or_null())
    }
    fn slice(&self, slice: &Slice, node: &AST, value: &Value, position: Position) -> ReturnValue {
        // define a local function to compute slice parameters
        fn compute_slice_params(
            slice: &Slice,
            array_length: usize,
            position: Position,
        ) -> Result<(isize, isize, isize), RuntimeError> {
            let len = array_length as isize;
            let step = slice.step.unwrap_or(1);
            if step == 0 {
                return Err(RuntimeError::get_syntax_error_builder()
                    .at(position)
                    .set_kind(Kind::InvalidValue)
                    .for_reason("slice step cannot be 0")
                    .build());
            };
            let start = slice
                .start
                .map(|x| if x < 0 { x + len } else { x })
                .unwrap_or(if step > 0 {
                    0
                } else {
                    (array_length - 1) as isize
                });
            let stop = slice
                .stop
                .map(|x| if x < 0 { x + len } else { x })
                .unwrap_or(if step > 0 { array_length as isize } else { -1 });
            Ok((start, stop, step))
        }
        // define a local function to slice an array
        fn slice_array<T>(vector: &Vec<T>, start: isize, stop: isize, step: isize) -> Vec<T>
        where
            T: Clone,
        {
            let mut result: Vec<T> = Vec::new();
            let len = vector.len() as isize;
            let end = ((stop - start) as f64 / step as f64).ceil() as isize;
            for n in 0..end {
                let index = start + n * step;
                if index >= 0 && index < len {
                    result.push(vector[index as usize].clone());
                }
            }
            result
        }
        // slice the current array or string
        let array = match &node.node_type {
            NodeType::None => Ok(value.clone()),
            _ => self.visit(node, value),
        }?;
        match array {
            Value::Array(input) => {
                let params = compute_slice_params(slice, input.len(), position)?;
                let vector = slice_array(&input, params.0, params.1, params.2);
                Ok(Value::Array(vector))
            }
            Value::String(text) => {
                // slicing string by converting to an array of chars
                let characters: Vec<char> = text.chars().collect();
                let params = compute_slice_params(slice, characters.len(), position)?;
                let sliced = slice_array(&characters, params.0, params.1, params.2);
                Ok(Value::String(String::from_iter(sliced)))
            }
            _ => Ok(Value::Null),
        }
    }

    fn visit_index_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let array = match &nodes[0].node_type {
            NodeType::None => Ok(value.clone()),
            _ => self.visit(&nodes[0], value),
        }?;

        Ok(match array {
            Value::Array(v) => {
                let index = nodes[1].number();
                let index = if index >= 0 {
                    index
                } else {
                    index + v.len() as i32
                };
                match TryInto::<usize>::try_into(index) {
                    Ok(i) => {
                        if i < v.len() {
                            v[i].clone()
                        } else {
                            Value::Null
                        }
                    }
                    _ => Value::Null,
                }
            }
            _ => Value::Null,
        })
    }

    fn visit_json_value(&self, node: &str, position: &Position) -> ReturnValue {
        Value::from_json(node).map_err(|e| Self::map_err(e, *position))
    }

    fn visit_comparator_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        assert_eq!(3, nodes.len());
        let left = self.visit(&nodes[0], value)?;
        let right = self.visit(&nodes[2], value)?;

        let requires_numbers = match &nodes[1].node_type {
            NodeType::Equal => false,
            NodeType::NotEqual => false,
            _ => true,
        };

        let lhs = left.as_f64();
        let rhs = right.as_f64();

        if let None = lhs {
            if requires_numbers {
                return Ok(Value::Null);
            }
        }
        if let None = rhs {
            if requires_numbers {
                return Ok(Value::Null);
            }
        }
        let compared: bool = match &nodes[1].node_type {
            NodeType::GreaterThan => lhs.unwrap() > rhs.unwrap(),
            NodeType::GreaterThanOrEqual => lhs.unwrap() >= rhs.unwrap(),
            NodeType::LessThanOrEqual => lhs.unwrap() <= rhs.unwrap(),
            NodeType::LessThan => lhs.unwrap() < rhs.unwrap(),
            NodeType::Equal => left == right,
            NodeType::NotEqual => left != right,
            _ => {
                return Err(RuntimeError::invalid_argument(
                    "an unrecognized comparator operator reached evaluation",
                ))
            }
        };

        Ok(compared.into())
    }

    fn visit_logical_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        if nodes.len() == 2 {
            return self
                .visit(&nodes[1], value)
                .map(|x| Value::Boolean(!x.is_truthy()));
        }

        let left = self.visit(&nodes[0], value)?;
        let right = self.visit(&nodes[2], value)?;

        let compared: Value = match &nodes[1].node_type {
            NodeType::And => {
                if left.is_truthy() {
                    right
                } else {
                    left
                }
            }
            NodeType::Or => {
                if left.is_truthy() {
                    left
                } else {
                    right
                }
            }
            _ => unreachable!(),
        };

        Ok(compared.into())
    }

    fn visit_function_expression(&self, ast: &Vec<AST>, value: &Value) -> ReturnValue {
        let function_name = ast[0].function_name();
        let function_args = ast[1].function_arguments();

        let mut arguments = Vec::new();
        for function_arg in function_args {
            arguments.push(self.visit(function_arg, value)?);
        }
        self.runtime.call(function_name, &arguments, self)
    }

    fn visit(&self, ast: &AST, value: &Value) -> ReturnValue {
        match &ast.node_type {
            NodeType::ComparatorExpression(nodes) => self.visit_comparator_expression(nodes, value),
            NodeType::CurrentNode => self.visit_current_node(ast, value),
            NodeType::Expression(nodes) => self.visit_expref(nodes, value),
            NodeType::FunctionExpression(nodes) => self.visit_function_expression(nodes, value),
            NodeType::HashWildcardProjection(nodes) => {
                self.visit_hash_wildcard_projection(nodes, value)
            }
            NodeType::IndexExpression(nodes) => self.visit_index_expression(nodes, value),
            NodeType::JsonValue(json) => self.visit_json_value(json, &ast.position),
            NodeType::LogicalExpression(nodes) => self.visit_logical_expression(nodes, value),
            NodeType::MultiSelectHash(nodes) => self.visit_multi_select_hash(nodes, value),
            NodeType::MultiSelectList(nodes) => self.visit_multi_select_list(nodes, value),
            NodeType::ParenExpression(nodes) => self.visit(&nodes[0], value),
            NodeType::PipeExpression(nodes) => self.visit_pipe_expression(nodes, value),
            NodeType::Projection(nodes) => self.visit_projection(nodes, value),
            NodeType::QuotedIdentifier(_name) => {
                self.visit_quoted_identifier(ast, value, &ast.position)
            }
            NodeType::RawString(_) => self.visit_raw_string(ast, value),
            NodeType::SubExpression(nodes) => self.visit_sub_expression(nodes, value),
            NodeType::UnquotedIdentifier(_name) => self.visit_identifier(ast, value),

            _ => {
                println!("{:?}", ast);
                unreachable!()
            }
        }
    }
    fn eval(&self, ast: &AST, root: &Value) -> ReturnValue {
        self.visit(ast, root)
    }
    fn unwrap_quoted_identifier(
        quoted_string: &String,
        position: Position,
    ) -> Result<String, RuntimeError> {
        // convert quoted identifier escape sequences
        let identifier = Value::from_json(quoted_string)
            .map_err(|err| Self::map_err(err, position))?
            .as_str()
            .unwrap()
            .to_string();
        Ok(identifier)
    }
    fn map_err(error: serde_json::Error, position: Position) -> RuntimeError {
        let message = format!("{}", error);
        RuntimeError::get_syntax_error_builder()
            .at(position)
            .for_reason(&message)
            .build()
    }
}
impl<'a> FunctionContext for Interpreter<'a> {
    fn create_by_function<'b>(
        &'b self,
        ast: &'b AST,
        param: &'b Vec<ParamTypes>,
        function: &'b dyn Function,
        param_index: usize,
    ) -> Result<ByFunctionHolder, RuntimeError> {
        let closure = move |value: &Value| -> Result<Value, RuntimeError> {
            let result = self.eval(ast, value);
            if result.is_err() {
                return result;
            }
            let value = result.unwrap();
            let data_types: Vec<DataType> = param
                .iter()
                .map(|x| match x {
                    ParamTypes::Of(t) => vec![*t],
                    ParamTypes::Of(t) => vec![*t],
                    ParamTypes::Any(v) => v.clone(),
                    ParamTypes::Any(v) => v.clone(),
                    _ => unreachable!(),
                })
                .flatten()
                .collect();
            if Runtime::matches_data_type(&value, &data_types) {
                Ok(value)
            } else {
                let err = RuntimeError::get_invalid_type_error_builder()
                    .for_function(function.get_name())
                    .for_expression_parameter(&function.get_parameter_name(param_index))
                    .expected_data_types(&data_types)
                    .received(&value)
                    .build();
                Err(err)
            }
        };
        Ok(ByFunctionHolder {
            closure: Box::new(closure),
        })
    }
}

use super::NodeType;
use crate::{Map, errors::Position, functions::ReturnValue};

/// Represents an abstract syntax tree node.
#[derive(Clone)]
pub struct AST {
    /// The node type.
    pub node_type: NodeType,
    /// The position of this node in the JMESPath expression.
    pub position: Position,
}
impl AST {
    /// Creates a new instance of the [`AST`] type.
    pub fn make(node_type: NodeType, position: Position) -> Self {
        AST {
            node_type,
            position,
        }
    }
    /// Evaluates a JMESPath expression.
    ///
    /// # Example
    /// ```
    /// use jmespath_community as jmespath;
    /// use jmespath::{parse, Value};
    /// use jmespath::errors::Position;
    ///
    /// let ast = parse("foo").unwrap();
    /// let data = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
    /// let result = ast.search(&data).unwrap();
    ///
    /// assert_eq!("bar", result);
    /// ```
    pub fn search(&self, root: &crate::Value) -> ReturnValue {
        let runtime = crate::Runtime::get_shared_runtime();
        runtime.search_ast(self, root)
    }
}

impl std::fmt::Debug for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.position, self.node_type)
    }
}
impl std::fmt::Display for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

macro_rules! ast_ {
    ($expr:ident, $enum:ident, $type:ty) => {
        pub(crate) fn $expr(&self) -> $type {
            match self {
                Self {
                    node_type: NodeType::$enum(v),
                    ..
                } => v,
                _ => unreachable!(),
            }
        }
    };
}
macro_rules! pretty {
    ($ident:ident) => {
        (stringify!($ident).to_string(), "".to_string())
    };
    ($ident:ident, $text:expr) => {
        (format!("{}({})", stringify!($ident), $text), "".to_string())
    };
}
impl AST {
    ast_!(hashmap, MultiSelectHash, &Map<String, AST>);
    ast_!(function_name, UnquotedIdentifier, &String);
    ast_!(raw_string, RawString, &String);
    ast_!(function_arguments, FunctionArguments, &Vec<AST>);
    pub(crate) fn identifier(&self) -> &String {
        match &self.node_type {
            NodeType::UnquotedIdentifier(v) => v,
            NodeType::QuotedIdentifier(v) => v,
            _ => unreachable!(),
        }
    }
    pub(crate) fn number(&self) -> i32 {
        match self {
            AST {
                node_type: NodeType::Number(n),
                ..
            } => *n,
            _ => unreachable!(),
        }
    }
    fn format(&self) -> String {
        self.pretty_print(0)
    }
    fn pretty_print(&self, indent_level: usize) -> String {
        fn pretty_print_children(children: &Vec<AST>, indent_level: usize) -> String {
            let mut text = "".to_string();
            for child in children {
                let pretty = format!("\n{}", child.pretty_print(indent_level));
                text.push_str(&pretty);
            }
            text
        }
        fn pretty_print_children_ref(children: &[&AST], indent_level: usize) -> String {
            let mut text = "".to_string();
            for child in children {
                let pretty = format!("\n{}", child.pretty_print(indent_level));
                text.push_str(&pretty);
            }
            text
        }
        let (node_type, children) = match &self.node_type {
            NodeType::And => pretty!(And),
            NodeType::CurrentNode => pretty!(CurrentNode),
            NodeType::Equal => pretty!(Equal),
            NodeType::Flatten => pretty!(Flatten),
            NodeType::GreaterThan => pretty!(GreaterThan),
            NodeType::GreaterThanOrEqual => pretty!(GreaterThanOrEqual),
            NodeType::LessThan => pretty!(LessThan),
            NodeType::LessThanOrEqual => pretty!(LessThanOrEqual),
            NodeType::ListWildcard => pretty!(ListWildcard),
            NodeType::None => pretty!(None),
            NodeType::Not => pretty!(Not),
            NodeType::NotEqual => pretty!(NotEqual),
            NodeType::Or => pretty!(Or),

            NodeType::JsonValue(text) => pretty!(JsonValue, text),
            NodeType::Number(text) => pretty!(Number, text),
            NodeType::QuotedIdentifier(text) => pretty!(QuotedIdentifier, text),
            NodeType::RawString(text) => pretty!(RawString, text),
            NodeType::UnquotedIdentifier(text) => pretty!(UnquotedIdentifier, text),

            NodeType::ComparatorExpression(vec) => (
                "ComparatorExpression".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),

            NodeType::Expression(vec) => (
                "Expression".to_string(),
                pretty_print_children_ref(&[&vec[0]], indent_level + 1),
            ),
            NodeType::Filter(vec) => (
                "Filter".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::FunctionArguments(vec) => (
                "FunctionArguments".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::FunctionExpression(vec) => (
                "FunctionExpression".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::HashWildcardProjection(vec) => (
                "HashWildcardProjection".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::Index(vec) => (
                "Index".to_string(),
                pretty_print_children(vec, indent_level),
            ),
            NodeType::IndexExpression(vec) => (
                "IndexExpression".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::LogicalExpression(vec) => (
                "LogicalExpression".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::MultiSelectHash(vec) => {
                let mut children = "".to_string();
                for item in vec {
                    children.push_str(&format!("\n{}{}", "  ".repeat(indent_level + 1), item.0));
                    children.push_str(&pretty_print_children_ref(&[item.1], indent_level + 2));
                }
                ("MultiSelectHash".to_string(), children)
            }
            NodeType::MultiSelectList(vec) => (
                "MultiSelectList".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::ParenExpression(vec) => (
                "ParenExpression".to_string(),
                pretty_print_children_ref(&[&vec[0]], indent_level + 1),
            ),
            NodeType::PipeExpression(vec) => (
                "PipeExpression".to_string(),
                pretty_print_children_ref(&[&vec[0], &vec[1]], indent_level + 1),
            ),
            NodeType::Projection(vec) => (
                "Projection".to_string(),
                pretty_print_children(vec, indent_level + 1),
            ),
            NodeType::Slice(vec) => (
                format!("Slice[{:?}:{:?}:{:?}]", vec.start, vec.stop, vec.step),
                "".to_string(),
            ),
            NodeType::SubExpression(vec) => {
                let children = format!(
                    "\n{}\n{}",
                    vec[0].pretty_print(indent_level + 1),
                    vec[1].pretty_print(indent_level + 1)
                );
                ("SubExpression".to_string(), children)
            }
        };
        format!(
            "{}{} [{}, {}]{}",
            "  ".repeat(indent_level),
            node_type,
            self.position.line,
            self.position.column,
            children,
        )
    }
}

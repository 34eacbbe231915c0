use crate::{Value, utils::Number};

impl Eq for Value {}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match self {
            Value::Expression(_) => false,
            Value::Null => other.is_null(),
            Value::Array(a) => other.is_array() && Some(a) == other.as_array(),
            Value::Boolean(b) => other.is_bool() && Some(*b) == other.as_bool(),
            Value::Number(Number { number: n, .. }) => {
                other.is_number() && float_eq(*n, other.as_number().unwrap().into())
            }
            Value::String(s) => other.is_str() && s == other.as_str().unwrap(),
            Value::Object(o) => other.is_object() && Some(o) == other.as_object(),
        }
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.is_bool()
            && if *other {
                self.is_true()
            } else {
                self.is_false()
            }
    }
}

impl PartialEq<Value> for Option<()> {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<Option<()>> for Value {
    fn eq(&self, _: &Option<()>) -> bool {
        self.is_null()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.is_str() && other == &self.as_str().unwrap()
    }
}
impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.is_str() && other == &self.as_str().unwrap()
    }
}

macro_rules! eq_num_lhs {
    ($int_type:ty) => {
        impl PartialEq<$int_type> for Value {
            fn eq(&self, other: &$int_type) -> bool {
                self.is_number() && float_eq(self.as_f64().unwrap(), (*other) as f64)
            }
        }
    };
}
eq_num_lhs!(i8);
eq_num_lhs!(i16);
eq_num_lhs!(i32);
eq_num_lhs!(i64);

eq_num_lhs!(u8);
eq_num_lhs!(u16);
eq_num_lhs!(u32);
eq_num_lhs!(u64);

eq_num_lhs!(f32);
eq_num_lhs!(f64);

eq_num_lhs!(isize);
eq_num_lhs!(usize);

macro_rules! eq_num_rhs {
    ($int_type:ty) => {
        impl PartialEq<Value> for $int_type {
            fn eq(&self, other: &Value) -> bool {
                other == self
            }
        }
    };
}

eq_num_rhs!(i8);
eq_num_rhs!(i16);
eq_num_rhs!(i32);
eq_num_rhs!(i64);

eq_num_rhs!(u8);
eq_num_rhs!(u16);
eq_num_rhs!(u32);
eq_num_rhs!(u64);

eq_num_rhs!(f32);
eq_num_rhs!(f64);

eq_num_rhs!(isize);
eq_num_rhs!(usize);

/// Compares two floating point numbers
#[inline]
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    let diff = (b - a).abs();
    return diff < std::f64::EPSILON;
}

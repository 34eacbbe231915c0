pub mod abs;
pub mod avg;
pub mod ceil;
pub mod contains;
pub mod ends_with;
pub mod floor;
pub mod join;
pub mod keys;
pub mod length;
pub mod map;
pub mod max;
pub mod max_by;
pub mod merge;
pub mod min;
pub mod min_by;
pub mod not_null;
pub mod reverse;
pub mod sort;
pub mod sort_by;
pub mod starts_with;
pub mod sum;
pub mod to_array;
pub mod to_number;
pub mod to_string;
pub mod type_;
pub mod values;

#[cfg(test)]
mod test_utils {

    use crate::functions::{Function, RuntimeError};
    use crate::{FunctionContext, Runtime};

    pub(crate) struct Fixture {
        pub runtime: Runtime,
    }
    impl Fixture {
        pub(crate) fn setup() -> Self {
            let runtime = Runtime::create_runtime();
            Fixture { runtime }
        }
    }
    impl FunctionContext for Fixture {
        fn create_by_function<'a>(
            &'a self,
            _ast: &'a crate::AST,
            _params: &'a Vec<crate::functions::ParamTypes>,
            _function: &'a dyn Function,
            _param_index: usize,
        ) -> Result<crate::ByFunctionHolder<'a>, RuntimeError> {
            todo!()
        }
    }
}

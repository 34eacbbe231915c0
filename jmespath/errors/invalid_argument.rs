use super::{error_builder, Error, Kind, Position};

pub(crate) trait InvalidArgumentErrorBuilderFactory {
    type Builder: super::error_builder::InvalidArgumentErrorBuilder;
    fn get_invalid_argument_error_builder() -> Self::Builder;
}
impl self::InvalidArgumentErrorBuilderFactory for Error {
    type Builder = self::InvalidArgumentErrorBuilder;

    fn get_invalid_argument_error_builder() -> Self::Builder {
        Self::Builder::new()
    }
}
pub(crate) struct InvalidArgumentErrorBuilder {
    message: String,
    position: Option<Position>,
}
impl InvalidArgumentErrorBuilder {
    pub fn new() -> Self {
        InvalidArgumentErrorBuilder {
            message: "".to_string(),
            position: None,
        }
    }
}
impl error_builder::InvalidArgumentErrorBuilder for InvalidArgumentErrorBuilder {
    fn for_reason(&mut self, message: &str) -> &mut Self {
        self.message = message.to_string();
        self
    }
}
impl error_builder::ErrorBuilder for InvalidArgumentErrorBuilder {
    fn at(&mut self, position: super::Position) -> &mut Self {
        self.position = Some(position);
        self
    }
    fn build(&mut self) -> Error {
        return Error {
            kind: Kind::InvalidArgument,
            message: std::mem::replace(&mut self.message, String::new()),
            position: self.position,
        };
    }
}

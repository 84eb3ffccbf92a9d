use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Invalid sold date `{value}`: {message}")]
    InvalidDate { value: String, message: String },
}

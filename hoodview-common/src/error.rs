use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommonError {
    #[error("Invalid CSS color: `{0}`")]
    InvalidColor(String),

    #[error("Unknown {kind} `{value}`, expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

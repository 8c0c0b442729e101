use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        var: String,
        value: String,
        expected: &'static str,
    },
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown metric kind `{0}`")]
    UnknownMetricKind(String),
    #[error("unknown activity level `{0}`")]
    UnknownActivityLevel(String),
    #[error("unknown goal type `{0}`")]
    UnknownGoalType(String),
    #[error("unknown biological sex `{0}`")]
    UnknownSex(String),
}

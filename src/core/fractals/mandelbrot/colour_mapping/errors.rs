use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColourSchemeError {
    #[error("unknown colour scheme {0:?}")]
    UnknownColourScheme(String),
}

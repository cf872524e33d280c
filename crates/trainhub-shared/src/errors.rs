#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("expected three '.' separated parts but found {0}")]
    Malformed(usize),
    #[error("token part is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

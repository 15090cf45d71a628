use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Binding tree could not be loaded: {0}")]
    Schema(String),

    #[error("Code generation failed: {0}")]
    CodeGeneration(String),

    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Schema(err.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        let mut message = err.to_string();
        if let Some(source) = std::error::Error::source(&err) {
            message.push_str(&format!(": {}", source));
        }
        Error::CodeGeneration(message)
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

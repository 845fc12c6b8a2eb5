use thiserror::Error;

/// Errores de la frontera HTTP. Los viewmodels los traducen a mensajes de UI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request build error: {0}")]
    Request(String),
}

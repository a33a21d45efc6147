/// Error types for loading listings and configuration
#[derive(Debug)]
pub enum ListingError {
    ParseError(String),
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    ListingNotFound(String),
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        ListingError::IoError(err)
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        ListingError::SerdeJsonError(err)
    }
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ListingError::IoError(err) => write!(f, "IO error: {}", err),
            ListingError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            ListingError::ListingNotFound(id) => write!(f, "Listing not found: {}", id),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::IoError(err) => Some(err),
            ListingError::SerdeJsonError(err) => Some(err),
            _ => None,
        }
    }
}

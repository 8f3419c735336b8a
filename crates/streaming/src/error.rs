/// What failed during a fetch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Boundary topology could not be retrieved or decoded; the base map
    /// never renders.
    Boundary,
    /// One of the joined per-object position requests failed; the whole
    /// batch is discarded.
    Position,
    /// A position response arrived without the expected positions field.
    MalformedPosition,
}

/// Error type for fetch operations.
#[derive(Debug)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: FetchErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchError, FetchErrorKind};

    #[test]
    fn display_is_the_message() {
        let err = FetchError::new(FetchErrorKind::Position, "request failed");
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = FetchError::with_source(FetchErrorKind::Position, "request failed", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}

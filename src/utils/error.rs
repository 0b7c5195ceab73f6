use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for sectoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for sectoc operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// A heading tag whose depth cannot be read (e.g. "H", "Hx", "H0")
    InvalidHeadingTag(String),
    /// Document structure error
    Document(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::InvalidHeadingTag(tag) => write!(f, "Invalid heading tag: {:?}", tag),
            TocError::Document(msg) => write!(f, "Document error: {}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TocError::InvalidHeadingTag("Hx".to_string()).to_string(),
            "Invalid heading tag: \"Hx\""
        );
        assert_eq!(
            TocError::Config("bad depth".to_string()).to_string(),
            "Configuration error: bad depth"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = TocError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_boxed_downcast() {
        let boxed: Box<dyn Error> = TocError::InvalidHeadingTag("P".to_string()).into();
        assert!(matches!(
            boxed.downcast_ref::<TocError>(),
            Some(TocError::InvalidHeadingTag(_))
        ));
    }
}

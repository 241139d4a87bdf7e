use std::convert::From;
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    ConfigParse,
    ConfigMissing,
    ThemeColor,
    DateParse,
    IOError(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &error.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            &format!("expected YYYY-MM-DD: {}", error),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::ConfigMissing => "configuration file not found".to_owned(),
            ErrorKind::ThemeColor => "unknown theme color".to_owned(),
            ErrorKind::DateParse => "invalid date".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_kind_and_message() {
        let err = Error::new(ErrorKind::ThemeColor, "'purple'");
        assert_eq!(err.to_string(), "unknown theme color: 'purple'");

        let err = Error::from(ErrorKind::ConfigMissing);
        assert_eq!(err.to_string(), "configuration file not found");
    }

    #[test]
    fn wraps_io_errors() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(err.to_string(), "disk on fire");
        assert!(error::Error::source(&err).is_some());
    }
}

/// All possible Dunmail library errors
#[derive(Clone, Debug)]
pub enum Error {
    /// Server-side configuration problem, e.g. a missing provider key.
    Config(String),
    /// Invalid or incomplete request payload.
    BadRequest(String),
    /// A resolved attachment path could not be read.
    AttachmentNotFound(String),
    Template(String),
    Delivery(String),
    Generic(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Config/BadRequest/AttachmentNotFound are echoed verbatim in HTTP
        // responses, so no variant prefix on those.
        match *self {
            Error::Config(ref msg) => write!(f, "{}", msg),
            Error::BadRequest(ref msg) => write!(f, "{}", msg),
            Error::AttachmentNotFound(ref path) => {
                write!(f, "Attachment not found: {}", path)
            }
            Error::Template(ref msg) => write!(f, "Template: {}", msg),
            Error::Delivery(ref msg) => write!(f, "Delivery: {}", msg),
            Error::Generic(ref msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Delivery(err.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Template(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

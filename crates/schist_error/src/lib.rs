use std::error::Error;
use std::fmt;

pub type Result<T, E = SchistError> = std::result::Result<T, E>;

/// Return early with a "not implemented" error.
///
/// Accepts the same arguments as `format!`.
#[macro_export]
macro_rules! not_implemented {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        return Err($crate::SchistError::new(format!("Not implemented: {msg}")));
    }};
}

#[derive(Debug)]
pub struct SchistError {
    /// Message for the error.
    msg: String,

    /// Source of the error, if any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl SchistError {
    pub fn new(msg: impl Into<String>) -> Self {
        SchistError {
            msg: msg.into(),
            source: None,
        }
    }

    pub fn with_source(msg: impl Into<String>, source: Box<dyn Error + Send + Sync>) -> Self {
        SchistError {
            msg: msg.into(),
            source: Some(source),
        }
    }
}

impl fmt::Display for SchistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl Error for SchistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

/// Extension trait for adding context to the error variant of a result.
pub trait ResultExt<T, E> {
    /// Wrap an error with a static context string.
    fn context(self, msg: &'static str) -> Result<T>;

    /// Wrap an error with a context string generated from a function.
    fn context_fn<F: Fn() -> String>(self, f: F) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn context(self, msg: &'static str) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(SchistError::with_source(msg, Box::new(e))),
        }
    }

    fn context_fn<F: Fn() -> String>(self, f: F) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(SchistError::with_source(f(), Box::new(e))),
        }
    }
}

/// Extension trait for converting options into results.
pub trait OptionExt<T> {
    /// Return an error with the given message if the option is None.
    fn required(self, msg: &'static str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, msg: &'static str) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(SchistError::new(format!("Missing required value: {msg}"))),
        }
    }
}

use std::{error, io};

pub struct Error {
    msg: String,
    source: Option<Box<dyn error::Error + Send + Sync>>
}

impl Error {
    #[inline]
    pub fn new(msg: &str) -> Self {
        Error {
            msg: msg.to_string(),
            source: None,
        }
    }

    #[inline]
    pub fn other<E>(error: E) -> Self
    where 
        E: Into<Box<dyn error::Error + Send + Sync>>
    {
        let error = error.into();

        Error {
            msg: format!("{}", error),
            source: Some(error),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::other(value)
    }
}

impl std::fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &_)
    }
}

pub type Result<V, E=Error> = std::result::Result<V, E>;

use std::{
    fmt::{self, Display},
    io,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedBufferEnd,
    InvalidTag,
    UnexpectedEndTag,
    VarnumTooLarge,
    InvalidOpeningTag,
    UnexpectedRootName(String, String),
    Validation(String),
    DepthLimitExceeded(usize),
    Mutf8(String),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnexpectedBufferEnd => f.write_str("unexpected end of buffer"),
            Error::InvalidTag => f.write_str("invalid tag"),
            Error::UnexpectedEndTag => f.write_str("unexpected end tag"),
            Error::VarnumTooLarge => f.write_str("varint too large"),
            Error::InvalidOpeningTag => f.write_str("invalid opening tag"),
            Error::UnexpectedRootName(expected, found) => f.write_fmt(format_args!(
                "unexpected root name: expected {:?}, found {:?}",
                expected, found
            )),
            Error::Validation(msg) => f.write_fmt(format_args!("invalid hint: {}", msg)),
            Error::DepthLimitExceeded(limit) => {
                f.write_fmt(format_args!("recursion depth limit ({}) exceeded", limit))
            }
            Error::Mutf8(msg) => f.write_fmt(format_args!("invalid modified utf-8: {}", msg)),
            Error::Io(err) => f.write_fmt(format_args!("io error: {}", err)),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl std::error::Error for Error {}

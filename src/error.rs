use alloc::string::String;

/// Errors from PGM decoding and encoding.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PgmError {
    /// A value the format cannot represent: zero width/height/maxval, a
    /// format code outside {2, 5}, a dimension above 65535, or a comment
    /// containing a line break.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The stream ran out where more bytes were required.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// The first header line does not start with `P5` or `P2`.
    #[error("invalid magic number, probably not a PGM file")]
    InvalidMagic,

    /// A token that should have been a decimal integer was not.
    #[error("malformed integer token `{0}`")]
    MalformedToken(String),

    /// Encode or pixel decode attempted before the required properties
    /// were set.
    #[error("one or more image properties not set")]
    IncompleteProperties,

    /// The caller's pixel buffer does not hold exactly `width * height`
    /// samples.
    #[error("pixel buffer holds {actual} bytes, image needs {needed}")]
    BufferSizeMismatch { needed: usize, actual: usize },
}

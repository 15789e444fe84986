use crate::error::ByteMediaError;

pub type Result<T> = std::result::Result<T, ByteMediaError>;

//! Error types for record encoding

use thiserror::Error;

use crate::charset::Charset;
use crate::scalar::ScalarType;

/// Configuration-time failure. Fatal at setup: the encoder is never
/// constructed from a configuration that produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("type list too short: {names} column names but only {types} types")]
    TypeListTooShort { names: usize, types: usize },

    #[error("unknown charset label: '{0}'")]
    UnknownCharset(String),

    #[error("unrecognized column type '{type_name}' for column '{column}'")]
    UnrecognizedType { column: String, type_name: String },

    #[error("column name '{column}' is not encodable as {charset}")]
    UnencodableColumn { column: String, charset: Charset },
}

/// A single textual value could not be encoded as its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueFormatError {
    #[error("invalid {ty} value '{value}': {source}")]
    InvalidInt {
        ty: ScalarType,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid {ty} value '{value}': {source}")]
    InvalidFloat {
        ty: ScalarType,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("value '{value}' is not encodable as {charset}")]
    Unencodable { charset: Charset, value: String },
}

/// Whole-record failure: one attribute could not be encoded, so the
/// record's put mutation is discarded in full — no partial column set is
/// ever emitted.
///
/// Carries enough context (row key, attribute key and value, declared
/// type) for the delivery pipeline to log and route the record without
/// parsing a rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "row '{}': attribute '{column}'='{value}' failed to encode as {ty}",
    String::from_utf8_lossy(.row_key)
)]
pub struct RecordEncodeError {
    pub row_key: Vec<u8>,
    pub column: String,
    pub value: String,
    pub ty: ScalarType,
    #[source]
    pub source: ValueFormatError,
}

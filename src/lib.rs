//! Type-directed record-to-mutation encoding for row-store sinks.
//!
//! One ingest record — a binary row key plus ordered string attributes —
//! goes in; a [`MutationSet`] comes out: each attribute re-encoded into
//! the canonical bytes of its declared column type, plus an optional +1
//! counter increment on a configured column. The delivery pipeline that
//! produces records and ships mutations to the row store (batching,
//! retries, transport) lives outside this crate.
//!
//! ```
//! use rowsink::{EncoderConfig, Record, RecordEncoder};
//!
//! let config = EncoderConfig {
//!     column_names: vec!["qty".into(), "note".into()],
//!     column_types: vec!["int".into(), "string".into()],
//!     ..EncoderConfig::default()
//! };
//! let encoder = RecordEncoder::from_config(&config, b"cf".to_vec()).unwrap();
//!
//! let record = Record::new(b"row-1".to_vec())
//!     .attribute("qty", "42")
//!     .attribute("note", "ok");
//! let mutations = encoder.encode(&record).unwrap();
//! assert_eq!(mutations.put.unwrap().columns.len(), 2);
//! ```

pub mod charset;
pub mod config;
pub mod encoder;
pub mod error;
pub mod mutation;
pub mod registry;
pub mod scalar;

pub use charset::Charset;
pub use config::EncoderConfig;
pub use encoder::RecordEncoder;
pub use error::{ConfigError, RecordEncodeError, ValueFormatError};
pub use mutation::{IncrementMutation, MutationSet, PutColumn, PutMutation, Record};
pub use registry::ColumnTypeRegistry;
pub use scalar::{encode_scalar, ScalarType};

//! Per-record orchestrator: record → mutation set.

use tracing::trace;

use crate::config::EncoderConfig;
use crate::error::{ConfigError, RecordEncodeError, ValueFormatError};
use crate::mutation::{IncrementMutation, MutationSet, PutColumn, PutMutation, Record};
use crate::registry::ColumnTypeRegistry;
use crate::scalar::{encode_scalar, ScalarType};

/// Encodes records into mutation sets for one target column family.
///
/// Immutable after construction: `encode` is a pure function of the
/// record and the captured configuration, so one encoder can be shared
/// across threads. There is no bound-record state to release between
/// calls.
#[derive(Debug, Clone)]
pub struct RecordEncoder {
    registry: ColumnTypeRegistry,
    family: Vec<u8>,
    skip_on_empty_attributes: bool,
}

impl RecordEncoder {
    /// Build an encoder from parsed configuration and a target column
    /// family.
    pub fn from_config(
        config: &EncoderConfig,
        family: impl Into<Vec<u8>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: ColumnTypeRegistry::build(config)?,
            family: family.into(),
            skip_on_empty_attributes: config.skip_on_empty_attributes,
        })
    }

    /// Build from an already-constructed registry.
    pub fn new(
        registry: ColumnTypeRegistry,
        family: impl Into<Vec<u8>>,
        skip_on_empty_attributes: bool,
    ) -> Self {
        Self {
            registry,
            family: family.into(),
            skip_on_empty_attributes,
        }
    }

    pub fn registry(&self) -> &ColumnTypeRegistry {
        &self.registry
    }

    pub fn family(&self) -> &[u8] {
        &self.family
    }

    /// Encode one record into a [`MutationSet`].
    ///
    /// An empty row key yields an empty set, no matter what the
    /// attributes hold. An empty attribute list yields an empty set when
    /// `skipOnEmptyAttributes` is on. Attributes with no value or no
    /// registered column type are skipped; a value that fails to encode
    /// as its declared type fails the whole record — no partial put, no
    /// increment.
    pub fn encode(&self, record: &Record) -> Result<MutationSet, RecordEncodeError> {
        if record.row_key.is_empty() {
            return Ok(MutationSet::empty());
        }
        if record.attributes.is_empty() && self.skip_on_empty_attributes {
            return Ok(MutationSet::empty());
        }

        let mut columns = Vec::with_capacity(record.attributes.len());
        for (key, value) in &record.attributes {
            let Some(value) = value.as_deref() else {
                continue;
            };
            let Some((ty, qualifier)) = self.registry.entry(key) else {
                trace!("attribute '{}' has no registered column type, skipped", key);
                continue;
            };
            let encoded = encode_scalar(ty, value, self.registry.charset())
                .map_err(|source| self.attribute_error(record, key, value, ty, source))?;
            columns.push(PutColumn {
                qualifier: qualifier.to_vec(),
                value: encoded,
            });
        }

        let put = PutMutation {
            row_key: record.row_key.clone(),
            family: self.family.clone(),
            columns,
        };
        let increment = self
            .registry
            .increment_qualifier()
            .map(|qualifier| IncrementMutation {
                row_key: record.row_key.clone(),
                family: self.family.clone(),
                qualifier: qualifier.to_vec(),
                delta: 1,
            });

        Ok(MutationSet {
            put: Some(put),
            increment,
        })
    }

    fn attribute_error(
        &self,
        record: &Record,
        column: &str,
        value: &str,
        ty: ScalarType,
        source: ValueFormatError,
    ) -> RecordEncodeError {
        RecordEncodeError {
            row_key: record.row_key.clone(),
            column: column.to_string(),
            value: value.to_string(),
            ty,
            source,
        }
    }
}

//! Column-name → scalar-type registry, built once at configuration time.

use std::collections::HashMap;

use tracing::warn;

use crate::charset::Charset;
use crate::config::EncoderConfig;
use crate::error::ConfigError;
use crate::scalar::ScalarType;

/// Immutable mapping from column name to declared scalar type.
///
/// Built once per encoder from the parsed configuration and shared
/// read-only by any number of encode calls. Qualifier bytes for every
/// registered column (and the increment column) are pre-encoded here so
/// the per-record path never touches the charset for names.
#[derive(Debug, Clone)]
pub struct ColumnTypeRegistry {
    columns: HashMap<String, ColumnEntry>,
    charset: Charset,
    increment_qualifier: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
struct ColumnEntry {
    ty: ScalarType,
    qualifier: Vec<u8>,
}

impl ColumnTypeRegistry {
    /// Pair `column_names[i]` with `column_types[i]` and build the
    /// registry.
    ///
    /// Fails if the type list is shorter than the name list; extra types
    /// are ignored. Duplicate names: the last occurrence wins. An
    /// unrecognized type name fails construction under `strict_types`,
    /// otherwise the column is left unregistered and its attributes are
    /// skipped during encoding.
    pub fn build(config: &EncoderConfig) -> Result<Self, ConfigError> {
        let charset = Charset::parse(&config.charset)
            .ok_or_else(|| ConfigError::UnknownCharset(config.charset.clone()))?;

        if config.column_types.len() < config.column_names.len() {
            return Err(ConfigError::TypeListTooShort {
                names: config.column_names.len(),
                types: config.column_types.len(),
            });
        }

        let mut columns = HashMap::with_capacity(config.column_names.len());
        for (name, type_name) in config.column_names.iter().zip(&config.column_types) {
            let Some(ty) = ScalarType::parse(type_name) else {
                if config.strict_types {
                    return Err(ConfigError::UnrecognizedType {
                        column: name.clone(),
                        type_name: type_name.clone(),
                    });
                }
                warn!(
                    "unrecognized column type '{}' for column '{}', attributes will be skipped",
                    type_name, name
                );
                continue;
            };
            let qualifier = encode_name(name, charset)?;
            columns.insert(name.clone(), ColumnEntry { ty, qualifier });
        }

        let increment_qualifier = config
            .increment_column
            .as_deref()
            .map(|name| encode_name(name, charset))
            .transpose()?;

        Ok(Self {
            columns,
            charset,
            increment_qualifier,
        })
    }

    /// Declared type for a column, or `None` if it was never configured.
    pub fn lookup(&self, name: &str) -> Option<ScalarType> {
        self.columns.get(name).map(|entry| entry.ty)
    }

    /// Declared type plus pre-encoded qualifier bytes for a column.
    pub(crate) fn entry(&self, name: &str) -> Option<(ScalarType, &[u8])> {
        self.columns
            .get(name)
            .map(|entry| (entry.ty, entry.qualifier.as_slice()))
    }

    /// Charset configured for name and string-value bytes.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Pre-encoded increment column qualifier, if one is configured.
    pub fn increment_qualifier(&self) -> Option<&[u8]> {
        self.increment_qualifier.as_deref()
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn encode_name(name: &str, charset: Charset) -> Result<Vec<u8>, ConfigError> {
    charset
        .encode(name)
        .ok_or_else(|| ConfigError::UnencodableColumn {
            column: name.to_string(),
            charset,
        })
}

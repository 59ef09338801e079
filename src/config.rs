//! Encoder configuration parsed from the host's key=value context.
//!
//! The host pipeline owns configuration loading; this module only turns
//! an already-parsed string→string map into a typed `EncoderConfig`,
//! applying the documented defaults for missing keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Comma-separated list of scalar type names, paired positionally with
/// `colNames`.
pub const TYPES_CONFIG: &str = "types";
pub const TYPES_DEFAULT: &str = "string";

/// Comma-separated list of column names to place attribute values in.
pub const COL_NAME_CONFIG: &str = "colNames";
pub const COLUMN_NAME_DEFAULT: &str = "col";

/// Charset used when turning column names and string values into bytes.
pub const CHARSET_CONFIG: &str = "charset";
pub const CHARSET_DEFAULT: &str = "UTF-8";

/// Column that receives a +1 counter increment per record. Empty or
/// missing means no increment.
pub const INCCOL_NAME_CONFIG: &str = "incrementColumn";

/// Whether a record with an empty attribute map yields an empty
/// mutation set instead of a zero-column put.
pub const SKIP_EMPTY_CONFIG: &str = "skipOnEmptyAttributes";

/// Whether an unrecognized type name in `types` fails configuration
/// instead of leaving the column unregistered.
pub const STRICT_TYPES_CONFIG: &str = "strictTypes";

/// Parsed encoder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub column_names: Vec<String>,
    pub column_types: Vec<String>,
    pub charset: String,
    pub increment_column: Option<String>,
    pub skip_on_empty_attributes: bool,
    pub strict_types: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            column_names: split_list(COLUMN_NAME_DEFAULT),
            column_types: split_list(TYPES_DEFAULT),
            charset: CHARSET_DEFAULT.to_string(),
            increment_column: None,
            skip_on_empty_attributes: true,
            strict_types: false,
        }
    }
}

impl EncoderConfig {
    /// Build a configuration from the host's parsed key=value settings.
    ///
    /// Missing keys take their defaults; an empty `incrementColumn` means
    /// no increment. Boolean keys accept `true`/`false` case-insensitively.
    pub fn from_context(context: &HashMap<String, String>) -> Self {
        let get = |key: &str, default: &str| -> String {
            context
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            column_names: split_list(&get(COL_NAME_CONFIG, COLUMN_NAME_DEFAULT)),
            column_types: split_list(&get(TYPES_CONFIG, TYPES_DEFAULT)),
            charset: get(CHARSET_CONFIG, CHARSET_DEFAULT),
            increment_column: context
                .get(INCCOL_NAME_CONFIG)
                .filter(|s| !s.is_empty())
                .cloned(),
            skip_on_empty_attributes: context
                .get(SKIP_EMPTY_CONFIG)
                .map_or(true, |s| s.eq_ignore_ascii_case("true")),
            strict_types: context
                .get(STRICT_TYPES_CONFIG)
                .is_some_and(|s| s.eq_ignore_ascii_case("true")),
        }
    }
}

/// Split a comma-separated configuration list. No trimming: names are
/// matched byte-for-byte against record attribute keys.
fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(str::to_string).collect()
}

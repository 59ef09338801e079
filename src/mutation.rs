//! Record input and mutation output types.

use serde::{Deserialize, Serialize};

/// One ingest record: a binary row key plus ordered named attributes.
///
/// The row key is used verbatim as the row identifier downstream; an
/// empty key short-circuits encoding to an empty [`MutationSet`]. A
/// `None` attribute value means "skip this attribute".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub row_key: Vec<u8>,
    pub attributes: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new(row_key: impl Into<Vec<u8>>) -> Self {
        Self {
            row_key: row_key.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), Some(value.into())));
        self
    }

    /// Append an attribute with no value.
    pub fn null_attribute(mut self, key: impl Into<String>) -> Self {
        self.attributes.push((key.into(), None));
        self
    }
}

/// One (qualifier, value) cell inside a put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutColumn {
    pub qualifier: Vec<u8>,
    pub value: Vec<u8>,
}

/// A write of zero or more columns to one row.
///
/// Column order is attribute order. A put with no columns can result
/// when every attribute of a record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutMutation {
    pub row_key: Vec<u8>,
    pub family: Vec<u8>,
    pub columns: Vec<PutColumn>,
}

/// An atomic counter addition on one (row, family, qualifier) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementMutation {
    pub row_key: Vec<u8>,
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub delta: i64,
}

/// Output of one encode call: zero or one put plus zero or one
/// increment, both addressing the source record's row key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSet {
    pub put: Option<PutMutation>,
    pub increment: Option<IncrementMutation>,
}

impl MutationSet {
    /// A set with nothing to deliver.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.put.is_none() && self.increment.is_none()
    }
}

use serde::{Deserialize, Serialize};

use crate::record::PropertyRecord;

/// Top-level response wrapper carrying `data`, `status` and `count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub data: EnvelopeData,
    pub status: ResponseStatus,
    pub count: usize,
}

/// Payload slot of the envelope: a record list on success, a bare `{}` on
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    Records(Vec<PropertyRecord>),
    Empty(EmptyData),
}

/// Serializes as an empty JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyData {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failed,
}

impl ResponseEnvelope {
    /// Success envelope; `count` always equals the number of records.
    pub fn success(records: Vec<PropertyRecord>) -> Self {
        let count = records.len();
        Self {
            data: EnvelopeData::Records(records),
            status: ResponseStatus::Success,
            count,
        }
    }

    /// Failure envelope: empty data object, zero count.
    pub fn failure() -> Self {
        Self {
            data: EnvelopeData::Empty(EmptyData::default()),
            status: ResponseStatus::Failed,
            count: 0,
        }
    }
}

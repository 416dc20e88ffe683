use crate::proximity::models::InsertedRecord;
use serde::{Deserialize, Serialize};

/// A lost/found pet report. `location` is kept exactly as the client serialized it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub location: Option<String>,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

impl Report {
    pub fn as_inserted_record(&self) -> InsertedRecord {
        InsertedRecord {
            subject_id: self.id.clone(),
            serialized_point: self.location.clone(),
            record_type: self.kind.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyReport {
    pub report: Report,
    pub distance_km: f64,
}

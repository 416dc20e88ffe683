use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// WKB hex or `POINT(lon lat)`.
    pub location: Option<String>,
}

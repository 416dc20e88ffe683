use crate::geo::models::LocationStatus;
use crate::reports::models::{NearbyReport, Report};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportResponse {
    pub error: bool,
    pub report: Report,
    /// Lets the client tell "no location recorded" apart from "the pin failed to parse".
    pub location_status: LocationStatus,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub error: bool,
    pub report: Report,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyReportsResponse {
    pub error: bool,
    pub reports: Vec<NearbyReport>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportsResponseError {
    ReportNotFound,
    UnknownCategory,
    InvalidLocation,
    InvalidRadius,
}

//! DTOs for region result reads.

use serde::Serialize;

use crate::domain::entities::RegionRecords;

/// Body of `GET /results/{region}`: observations keyed by city.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RegionResultsResponse {
    pub cities: RegionRecords,
}

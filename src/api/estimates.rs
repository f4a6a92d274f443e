//! `/api/estimaciones` endpoint.

use super::client::ApiClient;
use crate::errors::AppResult;
use crate::models::estimate::Estimate;

/// Submit the work-duration estimate that precedes a clock-in.
pub fn create(api: &ApiClient, estimate: &Estimate) -> AppResult<()> {
    api.post_unit("/api/estimaciones", estimate)
}

//! History flow: every invocation fetches; there is no client-side cache to
//! invalidate. The rendered list is hard-capped at five entries no matter
//! what the server returns.

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::UploadSummary;
use crate::session::Session;

pub const HISTORY_LIMIT: usize = 5;

pub fn fetch(cfg: &Config, session: Option<&Session>) -> AppResult<Vec<UploadSummary>> {
    let client = ApiClient::new(cfg, session)?;
    let mut entries = client.history()?;
    entries.truncate(HISTORY_LIMIT);
    Ok(entries)
}

/// Re-fetch one stored summary by id. Aggregates and the type distribution
/// come back in full; raw preview rows only ever exist in a direct upload
/// response, so the summary view omits the table for fetched summaries.
pub fn fetch_summary(cfg: &Config, session: Option<&Session>, id: i64) -> AppResult<UploadSummary> {
    let client = ApiClient::new(cfg, session)?;
    client.summary(id)
}

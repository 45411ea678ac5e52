use crate::domain::errors::FetchResult;

use super::query_state::QueryResult;
use super::value_objects::{Scope, YearRange};

/// Port to the remote statistics service.
///
/// One call covers both summary endpoints: implementations issue the fiscal
/// and citizenship reads concurrently and resolve only when both have
/// settled, merging them into a single `QueryResult`. Any sub-request failure
/// fails the whole call; no partial result exists.
pub trait SummaryGateway {
    async fn fetch_combined(&self, range: YearRange, scope: &Scope) -> FetchResult<QueryResult>;
}

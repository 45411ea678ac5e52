use futures::future::try_join;
use gloo_net::http::Request;
use serde_json::Value;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::visualization::{QueryResult, Scope, SummaryGateway, YearRange};

/// Production statistics service.
pub const DEFAULT_BASE_URL: &str = "https://hrf-asylum-be-b.herokuapp.com/cases";

/// REST client for the asylum statistics service.
pub struct AsylumStatsClient {
    base_url: String,
}

impl AsylumStatsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn summary_url(&self, endpoint: &str, range: YearRange, scope: &Scope) -> String {
        let mut url = format!(
            "{}/{}?from={}&to={}",
            self.base_url, endpoint, range.from, range.to
        );
        // The office parameter is omitted entirely under Scope::All.
        if let Some(office) = scope.office() {
            url.push_str(&format!("&office={}", office.value()));
        }
        url
    }

    pub fn fiscal_summary_url(&self, range: YearRange, scope: &Scope) -> String {
        self.summary_url("fiscalSummary", range, scope)
    }

    pub fn citizenship_summary_url(&self, range: YearRange, scope: &Scope) -> String {
        self.summary_url("citizenshipSummary", range, scope)
    }

    async fn fetch_json(&self, url: String) -> FetchResult<Value> {
        get_logger().debug(
            LogComponent::Infrastructure("AsylumAPI"),
            &format!("📡 GET {url}"),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(format!("{e:?}")))
    }
}

impl Default for AsylumStatsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryGateway for AsylumStatsClient {
    /// Both summaries are requested up front and joined; the call resolves
    /// only when both have settled, and the first failure short-circuits.
    async fn fetch_combined(&self, range: YearRange, scope: &Scope) -> FetchResult<QueryResult> {
        let fiscal = self.fetch_json(self.fiscal_summary_url(range, scope));
        let citizenship = self.fetch_json(self.citizenship_summary_url(range, scope));

        let (fiscal, citizenship) = try_join(fiscal, citizenship).await?;

        get_logger().info(
            LogComponent::Infrastructure("AsylumAPI"),
            &format!(
                "✅ Merged fiscal + citizenship summaries for {}-{}",
                range.from, range.to
            ),
        );

        Ok(QueryResult::merge(fiscal, citizenship))
    }
}

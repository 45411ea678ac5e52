use std::cell::{Cell, RefCell};

use crate::domain::errors::FetchResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::visualization::{
    OfficeId, QueryResult, QueryState, Scope, SummaryGateway, ViewKind, YearRange,
};

/// Reset action dispatched to the external query store when the scope tied to
/// the current data changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetVisualizationQuery {
    pub view: ViewKind,
    pub office: Option<OfficeId>,
}

/// Orchestrates the fetch-merge-render pipeline for the graph surface.
///
/// Owns the explicit query-state machine (`NotStarted -> Loading ->
/// Ready | Failed`) and the stale-response guard: every fetch takes a fresh
/// monotonically increasing token, and a completion whose token is no longer
/// the latest is discarded without touching state. In-flight requests are
/// never aborted, so a superseded fetch can still land late; the token is
/// what keeps it from clobbering the current scope's data.
pub struct ViewCoordinator<G> {
    gateway: G,
    dispatch: Box<dyn Fn(ResetVisualizationQuery)>,
    on_state: Box<dyn Fn(&QueryState)>,
    latest_token: Cell<u64>,
    state: RefCell<QueryState>,
    prior: RefCell<QueryState>,
}

impl<G: SummaryGateway> ViewCoordinator<G> {
    /// `dispatch` forwards reset actions to the external query store;
    /// `on_state` observes every state-machine transition (the presentation
    /// layer mirrors it into a reactive signal).
    pub fn new(
        gateway: G,
        dispatch: Box<dyn Fn(ResetVisualizationQuery)>,
        on_state: Box<dyn Fn(&QueryState)>,
    ) -> Self {
        Self {
            gateway,
            dispatch,
            on_state,
            latest_token: Cell::new(0),
            state: RefCell::new(QueryState::NotStarted),
            prior: RefCell::new(QueryState::NotStarted),
        }
    }

    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    fn set_state(&self, next: QueryState) {
        (self.on_state)(&next);
        *self.state.borrow_mut() = next;
    }

    /// Invalidate the query state tied to the current `(view, office)`:
    /// dispatches exactly one reset action carrying both values and returns
    /// the local machine to `NotStarted`.
    pub fn clear_query(&self, view: ViewKind, office: Option<&OfficeId>) {
        get_logger().debug(
            LogComponent::Application("ViewCoordinator"),
            &format!("🧹 Resetting query state for view={view} office={office:?}"),
        );

        self.set_state(QueryState::NotStarted);
        *self.prior.borrow_mut() = QueryState::NotStarted;
        (self.dispatch)(ResetVisualizationQuery { view, office: office.cloned() });
    }

    /// Enter `Loading` and take the token for a new fetch. The displaced
    /// state is stashed so a failed fetch can restore it.
    pub fn begin_fetch(&self) -> u64 {
        let token = self.latest_token.get() + 1;
        self.latest_token.set(token);

        let displaced = self.state.replace(QueryState::Loading);
        (self.on_state)(&QueryState::Loading);
        if !displaced.is_loading() {
            *self.prior.borrow_mut() = displaced;
        }
        token
    }

    /// Continuation run once the parallel join has settled. Split out from
    /// the async path so the token guard and state transitions can be
    /// exercised without a network.
    pub fn apply_outcome<F>(
        &self,
        token: u64,
        outcome: FetchResult<QueryResult>,
        view: ViewKind,
        office: Option<OfficeId>,
        callback: F,
    ) where
        F: FnOnce(ViewKind, Option<OfficeId>, Vec<QueryResult>),
    {
        if token != self.latest_token.get() {
            crate::log_warn!(
                LogComponent::Application("ViewCoordinator"),
                "⏱ Discarding stale fetch completion (token {} superseded by {})",
                token,
                self.latest_token.get()
            );
            return;
        }

        match outcome {
            Ok(result) => {
                self.set_state(QueryState::Ready(result.clone()));
                *self.prior.borrow_mut() = QueryState::Ready(result.clone());
                // Always a one-element sequence, per the callback contract.
                callback(view, office, vec![result]);
            }
            Err(error) => {
                crate::log_error!(
                    LogComponent::Application("ViewCoordinator"),
                    "❌ Combined fetch failed: {error}"
                );
                // Keep last good state: a prior Ready survives a failed
                // refresh; Failed only surfaces when no data was ever shown.
                let restored = match self.prior.borrow().clone() {
                    ready @ QueryState::Ready(_) => ready,
                    _ => QueryState::Failed,
                };
                self.set_state(restored);
            }
        }
    }

    /// The only path by which new data reaches the rendering surface: fetch
    /// both summaries for `range`, merge them, and hand the result to the
    /// state-setting callback together with the `(view, office)` context it
    /// was computed for.
    pub async fn update_state_with_new_data<F>(
        &self,
        range: YearRange,
        view: ViewKind,
        office: Option<OfficeId>,
        callback: F,
    ) where
        F: FnOnce(ViewKind, Option<OfficeId>, Vec<QueryResult>),
    {
        let token = self.begin_fetch();
        get_logger().info(
            LogComponent::Application("ViewCoordinator"),
            &format!(
                "📥 Fetching statistics {}-{} for view={view} office={office:?}",
                range.from, range.to
            ),
        );

        let scope = Scope::from_office(office.clone());
        let outcome = self.gateway.fetch_combined(range, &scope).await;
        self.apply_outcome(token, outcome, view, office, callback);
    }
}

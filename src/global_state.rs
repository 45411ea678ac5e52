use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::view_coordinator::ResetVisualizationQuery;
use crate::domain::visualization::{OfficeId, QueryResult, QueryState, ViewKind, YearRange};

/// What the state-setting callback delivered, together with the
/// `(view, office)` context it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveredResult {
    pub view: ViewKind,
    pub office: Option<OfficeId>,
    pub results: Vec<QueryResult>,
}

pub struct Globals {
    /// Externally-owned view-state cell; the resolver back-fills it when the
    /// route omits the view parameter.
    pub current_view: RwSignal<ViewKind>,
    pub year_range: RwSignal<YearRange>,
    /// Mirror of the coordinator's query-state machine.
    pub query_state: RwSignal<QueryState>,
    /// Query-store cell receiving reset actions from `clear_query`.
    pub last_reset: RwSignal<Option<ResetVisualizationQuery>>,
    /// Presentation state holder fed by the state-setting callback.
    pub delivered: RwSignal<Option<DeliveredResult>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_view: create_rw_signal(ViewKind::default()),
        year_range: create_rw_signal(YearRange::new(2015, 2022)),
        query_state: create_rw_signal(QueryState::NotStarted),
        last_reset: create_rw_signal(None),
        delivered: create_rw_signal(None),
    })
}

pub fn current_view() -> RwSignal<ViewKind> {
    globals().current_view
}

pub fn year_range() -> RwSignal<YearRange> {
    globals().year_range
}

pub fn query_state() -> RwSignal<QueryState> {
    globals().query_state
}

pub fn last_reset() -> RwSignal<Option<ResetVisualizationQuery>> {
    globals().last_reset
}

pub fn delivered() -> RwSignal<Option<DeliveredResult>> {
    globals().delivered
}

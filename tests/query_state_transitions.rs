use std::cell::RefCell;
use std::rc::Rc;

use asylum_chart_wasm::application::view_coordinator::ViewCoordinator;
use asylum_chart_wasm::domain::errors::{FetchError, FetchResult};
use asylum_chart_wasm::domain::visualization::{
    QueryResult, QueryState, Scope, SummaryGateway, ViewKind, YearRange,
};
use futures::executor::block_on;
use serde_json::json;

struct OneShot(RefCell<Option<FetchResult<QueryResult>>>);

impl SummaryGateway for OneShot {
    async fn fetch_combined(&self, _: YearRange, _: &Scope) -> FetchResult<QueryResult> {
        self.0.borrow_mut().take().expect("single fetch per test")
    }
}

fn observed() -> (Rc<RefCell<Vec<QueryState>>>, Box<dyn Fn(&QueryState)>) {
    let states = Rc::new(RefCell::new(Vec::new()));
    let states_in = Rc::clone(&states);
    (states, Box::new(move |state| states_in.borrow_mut().push(state.clone())))
}

#[test]
fn successful_fetch_is_loading_then_ready() {
    let result = QueryResult::merge(json!({"a": 1}), json!({"b": 2}));
    let gateway = OneShot(RefCell::new(Some(Ok(result.clone()))));
    let (states, on_state) = observed();
    let coordinator = ViewCoordinator::new(gateway, Box::new(|_| {}), on_state);

    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2015, 2022),
        ViewKind::TimeSeries,
        None,
        |_, _, _| {},
    ));

    assert_eq!(states.borrow().as_slice(), &[QueryState::Loading, QueryState::Ready(result)]);
}

#[test]
fn failed_first_fetch_is_loading_then_failed() {
    let gateway = OneShot(RefCell::new(Some(Err(FetchError::Status(500)))));
    let (states, on_state) = observed();
    let coordinator = ViewCoordinator::new(gateway, Box::new(|_| {}), on_state);

    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2015, 2022),
        ViewKind::TimeSeries,
        None,
        |_, _, _| {},
    ));

    assert_eq!(states.borrow().as_slice(), &[QueryState::Loading, QueryState::Failed]);
}

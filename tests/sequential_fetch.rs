use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use asylum_chart_wasm::application::view_coordinator::ViewCoordinator;
use asylum_chart_wasm::domain::errors::FetchResult;
use asylum_chart_wasm::domain::visualization::{
    OfficeId, QueryResult, QueryState, Scope, SummaryGateway, ViewKind, YearRange,
};
use futures::executor::block_on;
use serde_json::json;

struct ScriptedGateway {
    responses: RefCell<VecDeque<FetchResult<QueryResult>>>,
    seen_scopes: Rc<RefCell<Vec<Option<String>>>>,
}

impl ScriptedGateway {
    fn new(responses: Vec<FetchResult<QueryResult>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            seen_scopes: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl SummaryGateway for ScriptedGateway {
    async fn fetch_combined(&self, _range: YearRange, scope: &Scope) -> FetchResult<QueryResult> {
        self.seen_scopes.borrow_mut().push(scope.office().map(|o| o.value().to_string()));
        self.responses.borrow_mut().pop_front().expect("no scripted response left")
    }
}

#[test]
fn second_fetch_reflects_the_second_range_only() {
    let first = QueryResult::merge(json!({"range": "2015-2016"}), json!({"n": 1}));
    let second = QueryResult::merge(json!({"range": "2017-2018"}), json!({"n": 2}));
    let gateway = ScriptedGateway::new(vec![Ok(first.clone()), Ok(second.clone())]);
    let coordinator = ViewCoordinator::new(gateway, Box::new(|_| {}), Box::new(|_| {}));

    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in = Rc::clone(&seen);
    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2015, 2016),
        ViewKind::TimeSeries,
        None,
        move |_, _, results| seen_in.borrow_mut().extend(results),
    ));

    let seen_in = Rc::clone(&seen);
    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2017, 2018),
        ViewKind::TimeSeries,
        None,
        move |_, _, results| seen_in.borrow_mut().extend(results),
    ));

    let seen = seen.borrow();
    assert_eq!(seen.as_slice(), &[first, second.clone()]);
    assert_eq!(coordinator.state(), QueryState::Ready(second));
}

#[test]
fn callback_receives_a_one_element_sequence_with_context() {
    let result = QueryResult::merge(json!({"granted": 7}), json!({"rows": [1, 2]}));
    let gateway = ScriptedGateway::new(vec![Ok(result.clone())]);
    let coordinator = ViewCoordinator::new(gateway, Box::new(|_| {}), Box::new(|_| {}));

    let delivery = Rc::new(RefCell::new(None));
    let delivery_in = Rc::clone(&delivery);
    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2018, 2021),
        ViewKind::Citizenship,
        Some(OfficeId::from("ZLA")),
        move |view, office, results| {
            *delivery_in.borrow_mut() = Some((view, office, results));
        },
    ));

    let delivery = delivery.borrow();
    let (view, office, results) = delivery.as_ref().expect("callback invoked");
    assert_eq!(*view, ViewKind::Citizenship);
    assert_eq!(office.as_ref().unwrap().value(), "ZLA");
    assert_eq!(results.as_slice(), &[result]);
}

#[test]
fn office_scope_reaches_the_gateway() {
    let result = QueryResult::merge(json!({}), json!({}));
    let gateway = ScriptedGateway::new(vec![Ok(result.clone()), Ok(result)]);
    let seen_scopes = Rc::clone(&gateway.seen_scopes);
    let coordinator = ViewCoordinator::new(gateway, Box::new(|_| {}), Box::new(|_| {}));

    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2015, 2022),
        ViewKind::TimeSeries,
        Some(OfficeId::from("ZNY")),
        |_, _, _| {},
    ));
    block_on(coordinator.update_state_with_new_data(
        YearRange::new(2015, 2022),
        ViewKind::TimeSeries,
        None,
        |_, _, _| {},
    ));

    assert_eq!(seen_scopes.borrow().as_slice(), &[Some("ZNY".to_string()), None]);
}

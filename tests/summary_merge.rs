use asylum_chart_wasm::domain::visualization::QueryResult;
use serde_json::json;

#[test]
fn merge_is_exact() {
    let merged = QueryResult::merge(json!({"a": 1}), json!({"b": 2}));
    assert_eq!(merged.as_value(), &json!({"a": 1, "citizenshipResults": {"b": 2}}));
}

#[test]
fn merge_is_field_order_independent() {
    let left = QueryResult::merge(json!({"a": 1, "z": 9}), json!({"b": 2}));
    let right = QueryResult::merge(json!({"z": 9, "a": 1}), json!({"b": 2}));
    assert_eq!(left, right);
}

#[test]
fn fiscal_fields_survive_the_embed() {
    let fiscal = json!({
        "granted": 412,
        "denied": 997,
        "yearResults": [{"fiscal_year": 2019, "granted": 31}]
    });
    let merged = QueryResult::merge(fiscal.clone(), json!({"rows": []}));

    assert_eq!(merged.as_value().get("granted"), fiscal.get("granted"));
    assert_eq!(merged.as_value().get("yearResults"), fiscal.get("yearResults"));
    assert_eq!(merged.citizenship(), Some(&json!({"rows": []})));
}

#[test]
fn citizenship_payload_replaces_a_preexisting_embed_key() {
    let fiscal = json!({"citizenshipResults": "stale"});
    let merged = QueryResult::merge(fiscal, json!({"fresh": true}));
    assert_eq!(merged.citizenship(), Some(&json!({"fresh": true})));
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Merged fiscal + citizenship payload handed to the chart components.
///
/// The remote schema is not owned by this crate, so the payload stays a raw
/// JSON object; the only structure this side guarantees is the embed key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult(Value);

impl QueryResult {
    /// Field under which the citizenship summary is embedded; chart components
    /// expect exactly this key.
    pub const CITIZENSHIP_KEY: &'static str = "citizenshipResults";

    /// Embed the citizenship summary inside the fiscal summary. The service
    /// returns JSON objects; a non-object fiscal payload is replaced by an
    /// empty object so the embed key still lands.
    pub fn merge(fiscal: Value, citizenship: Value) -> Self {
        let mut merged = match fiscal {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        merged.insert(Self::CITIZENSHIP_KEY.to_string(), citizenship);
        Self(Value::Object(merged))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn citizenship(&self) -> Option<&Value> {
        self.0.get(Self::CITIZENSHIP_KEY)
    }
}

/// Lifecycle of the data behind the mounted chart, made explicit so the UI can
/// render loading and error affordances.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryState {
    #[default]
    NotStarted,
    Loading,
    Ready(QueryResult),
    Failed,
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            QueryState::Ready(result) => Some(result),
            _ => None,
        }
    }
}

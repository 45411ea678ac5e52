pub mod gateway;
pub mod query_state;
pub mod resolver;
pub mod value_objects;

pub use gateway::SummaryGateway;
pub use query_state::{QueryResult, QueryState};
pub use resolver::{Resolution, resolve, variant_for};
pub use value_objects::{ChartVariant, OfficeId, Scope, ViewKind, YearRange};

use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - chart family selected by the `view` route parameter
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ViewKind {
    #[default]
    #[strum(serialize = "time-series")]
    #[serde(rename = "time-series")]
    TimeSeries,

    #[strum(serialize = "office-heat-map")]
    #[serde(rename = "office-heat-map")]
    OfficeHeatMap,

    #[strum(serialize = "citizenship")]
    #[serde(rename = "citizenship")]
    Citizenship,
}

/// Value Object - asylum office identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct OfficeId(String);

impl OfficeId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OfficeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Whether statistics cover every office or a single one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    SingleOffice(OfficeId),
}

impl Scope {
    pub fn from_office(office: Option<OfficeId>) -> Self {
        match office {
            Some(id) => Scope::SingleOffice(id),
            None => Scope::All,
        }
    }

    /// Office restriction, if any.
    pub fn office(&self) -> Option<&OfficeId> {
        match self {
            Scope::All => None,
            Scope::SingleOffice(id) => Some(id),
        }
    }
}

/// Value Object - inclusive fiscal-year range
///
/// Caller-supplied and deliberately unvalidated here; the year selector owns
/// range sanity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct YearRange {
    pub from: u16,
    pub to: u16,
}

/// The concrete chart mounted for a `(ViewKind, Scope)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartVariant {
    TimeSeriesAll,
    OfficeHeatMap,
    CitizenshipMapAll,
    TimeSeriesSingleOffice(OfficeId),
    CitizenshipMapSingleOffice(OfficeId),
}

use std::str::FromStr;

use super::value_objects::{ChartVariant, OfficeId, Scope, ViewKind};

/// Normalized `(view, scope)` pair derived from raw route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub view: ViewKind,
    pub scope: Scope,
    /// True when the view parameter was absent (or unrecognized) and the
    /// default was substituted. The caller must persist the default into the
    /// view-state holder so subsequent renders agree on the current view.
    pub view_backfilled: bool,
}

/// Derive a `Resolution` from raw route parameters. Total: every combination
/// of present/absent inputs produces a defined pair, never an error.
pub fn resolve(raw_view: Option<&str>, raw_office: Option<&str>) -> Resolution {
    let (view, view_backfilled) = match raw_view.and_then(|v| ViewKind::from_str(v).ok()) {
        Some(view) => (view, false),
        None => (ViewKind::default(), true),
    };

    let scope = match raw_office.filter(|office| !office.is_empty()) {
        Some(office) => Scope::SingleOffice(OfficeId::from(office)),
        None => Scope::All,
    };

    Resolution { view, scope, view_backfilled }
}

/// The `(view, scope)` to chart lookup table. `None` means nothing renders:
/// the heat map has no single-office form, so that combination is a no-op
/// rather than an error.
pub fn variant_for(view: ViewKind, scope: &Scope) -> Option<ChartVariant> {
    match (view, scope) {
        (ViewKind::TimeSeries, Scope::All) => Some(ChartVariant::TimeSeriesAll),
        (ViewKind::OfficeHeatMap, Scope::All) => Some(ChartVariant::OfficeHeatMap),
        (ViewKind::Citizenship, Scope::All) => Some(ChartVariant::CitizenshipMapAll),
        (ViewKind::TimeSeries, Scope::SingleOffice(id)) => {
            Some(ChartVariant::TimeSeriesSingleOffice(id.clone()))
        }
        (ViewKind::Citizenship, Scope::SingleOffice(id)) => {
            Some(ChartVariant::CitizenshipMapSingleOffice(id.clone()))
        }
        (ViewKind::OfficeHeatMap, Scope::SingleOffice(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_view_defaults_and_backfills() {
        let resolution = resolve(None, None);
        assert_eq!(resolution.view, ViewKind::TimeSeries);
        assert_eq!(resolution.scope, Scope::All);
        assert!(resolution.view_backfilled);
    }

    #[test]
    fn present_view_is_kept_verbatim() {
        let resolution = resolve(Some("citizenship"), Some("NYC"));
        assert_eq!(resolution.view, ViewKind::Citizenship);
        assert_eq!(resolution.scope.office().unwrap().value(), "NYC");
        assert!(!resolution.view_backfilled);
    }
}

use std::str::FromStr;

use crate::domain::visualization::ViewKind;

/// Raw route parameters the graph surface consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub view: Option<String>,
    pub office: Option<String>,
}

/// Parse `/graphs`, `/graphs/:view`, and `/graphs/:office/:view` paths.
///
/// A single trailing segment is ambiguous; it is taken as a view name when it
/// parses as one and as an office identifier otherwise.
pub fn parse_path(path: &str) -> RouteParams {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next() != Some("graphs") {
        return RouteParams::default();
    }

    let first = segments.next().map(str::to_string);
    let second = segments.next().map(str::to_string);

    match (first, second) {
        (Some(office), Some(view)) => RouteParams { view: Some(view), office: Some(office) },
        (Some(only), None) => {
            if ViewKind::from_str(&only).is_ok() {
                RouteParams { view: Some(only), office: None }
            } else {
                RouteParams { view: None, office: Some(only) }
            }
        }
        _ => RouteParams::default(),
    }
}

/// Parameters for the current browser location; empty outside a browser.
pub fn current_params() -> RouteParams {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| parse_path(&path))
        .unwrap_or_default()
}

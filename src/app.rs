use std::rc::Rc;
use std::str::FromStr;

use leptos::*;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;

use crate::application::view_coordinator::ViewCoordinator;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::visualization::{
    ChartVariant, OfficeId, QueryState, ViewKind, resolve, variant_for,
};
use crate::global_state::{
    DeliveredResult, current_view, delivered, last_reset, query_state, year_range,
};
use crate::infrastructure::{http::AsylumStatsClient, routing};

pub type AppCoordinator = ViewCoordinator<AsylumStatsClient>;

fn make_coordinator() -> Rc<AppCoordinator> {
    Rc::new(ViewCoordinator::new(
        AsylumStatsClient::new(),
        Box::new(|reset| last_reset().set(Some(reset))),
        Box::new(|state| query_state().set(state.clone())),
    ))
}

/// Top-level graph surface: resolves route parameters into exactly one (or
/// zero) chart variants and hosts the sidebar controls that drive refreshes.
#[component]
pub fn GraphWrapper() -> impl IntoView {
    let params = routing::current_params();
    let resolution = resolve(params.view.as_deref(), params.office.as_deref());

    if resolution.view_backfilled {
        // Persist the defaulted view so subsequent renders agree on it.
        current_view().set(resolution.view);
    }

    let office = resolution.scope.office().cloned();
    let variant = variant_for(resolution.view, &resolution.scope);

    get_logger().info(
        LogComponent::Presentation("GraphWrapper"),
        &format!(
            "🗺 Mounting {:?} for view={} office={:?}",
            variant, resolution.view, office
        ),
    );

    provide_context(make_coordinator());

    view! {
        <div class="map-wrapper-container">
            {variant.map(mounted_chart)}
            <div class="user-input-sidebar-container">
                <ViewSelect office=office.clone()/>
                <YearLimitsSelect view=resolution.view office=office/>
            </div>
        </div>
    }
}

fn mounted_chart(variant: ChartVariant) -> View {
    match variant {
        ChartVariant::TimeSeriesAll => view! { <TimeSeriesAll/> }.into_view(),
        ChartVariant::OfficeHeatMap => view! { <OfficeHeatMap/> }.into_view(),
        ChartVariant::CitizenshipMapAll => view! { <CitizenshipMapAll/> }.into_view(),
        ChartVariant::TimeSeriesSingleOffice(office) => {
            view! { <TimeSeriesSingleOffice office=office/> }.into_view()
        }
        ChartVariant::CitizenshipMapSingleOffice(office) => {
            view! { <CitizenshipMapSingleOffice office=office/> }.into_view()
        }
    }
}

// Chart internals belong to the individual graph components; these shells
// report which variant is mounted and the lifecycle of its data.

#[component]
fn TimeSeriesAll() -> impl IntoView {
    view! { <ChartPanel title="Time series, all offices"/> }
}

#[component]
fn OfficeHeatMap() -> impl IntoView {
    view! { <ChartPanel title="Office heat map"/> }
}

#[component]
fn CitizenshipMapAll() -> impl IntoView {
    view! { <ChartPanel title="Citizenship map, all offices"/> }
}

#[component]
fn TimeSeriesSingleOffice(office: OfficeId) -> impl IntoView {
    view! { <ChartPanel title=format!("Time series, office {office}")/> }
}

#[component]
fn CitizenshipMapSingleOffice(office: OfficeId) -> impl IntoView {
    view! { <ChartPanel title=format!("Citizenship map, office {office}")/> }
}

#[component]
fn ChartPanel(#[prop(into)] title: String) -> impl IntoView {
    let state = query_state();

    view! {
        <div class="chart-panel">
            <h2>{title}</h2>
            <p class="status">{move || describe_state(&state.get())}</p>
        </div>
    }
}

fn describe_state(state: &QueryState) -> String {
    match state {
        QueryState::NotStarted => "No data loaded yet".to_string(),
        QueryState::Loading => "⏳ Loading statistics...".to_string(),
        QueryState::Ready(_) => "✅ Statistics loaded".to_string(),
        QueryState::Failed => "❌ Statistics refresh failed".to_string(),
    }
}

/// Chart-type selector bound to the external view-state cell. Switching views
/// invalidates the query state tied to the old one.
#[component]
fn ViewSelect(#[prop(optional_no_strip)] office: Option<OfficeId>) -> impl IntoView {
    let view_signal = current_view();
    let coordinator =
        use_context::<Rc<AppCoordinator>>().expect("GraphWrapper provides the coordinator");

    let on_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        if let Ok(kind) = ViewKind::from_str(&raw) {
            view_signal.set(kind);
            coordinator.clear_query(kind, office.as_ref());
        }
    };

    view! {
        <div class="view-select">
            <label>"Chart type"</label>
            <select on:change=on_change>
                {ViewKind::iter()
                    .map(|kind| {
                        view! {
                            <option value=kind.to_string() selected=move || view_signal.get() == kind>
                                {kind.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Year-limit inputs plus the fetch trigger. Changing a limit clears the
/// query tied to the old range; fetching routes through the coordinator and
/// lands in the presentation state holder.
#[component]
fn YearLimitsSelect(view: ViewKind, #[prop(optional_no_strip)] office: Option<OfficeId>) -> impl IntoView {
    let years = year_range();
    let coordinator =
        use_context::<Rc<AppCoordinator>>().expect("GraphWrapper provides the coordinator");

    let clear = {
        let coordinator = Rc::clone(&coordinator);
        let office = office.clone();
        move || coordinator.clear_query(view, office.as_ref())
    };

    let on_from = {
        let clear = clear.clone();
        move |ev: web_sys::Event| {
            if let Ok(from) = event_target_value(&ev).parse::<u16>() {
                years.update(|range| range.from = from);
                clear();
            }
        }
    };

    let on_to = {
        let clear = clear.clone();
        move |ev: web_sys::Event| {
            if let Ok(to) = event_target_value(&ev).parse::<u16>() {
                years.update(|range| range.to = to);
                clear();
            }
        }
    };

    let fetch = move |_| {
        let coordinator = Rc::clone(&coordinator);
        let office = office.clone();
        let range = years.get_untracked();
        spawn_local(async move {
            coordinator
                .update_state_with_new_data(range, view, office, |view, office, results| {
                    delivered().set(Some(DeliveredResult { view, office, results }));
                })
                .await;
        });
    };

    view! {
        <div class="year-limits-select">
            <label>
                "From"
                <input
                    type="number"
                    prop:value=move || years.get().from.to_string()
                    on:change=on_from
                />
            </label>
            <label>
                "To"
                <input
                    type="number"
                    prop:value=move || years.get().to.to_string()
                    on:change=on_to
                />
            </label>
            <button on:click=fetch>"Fetch new data"</button>
        </div>
    }
}

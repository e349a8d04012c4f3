//! Robot filter page and the per-type / per-node detail pages it leads to.
//!
//! Route params are shown as typed. Known slugs use their canonical label,
//! anything else is capitalized for display.

#[cfg(test)]
#[path = "robots_test.rs"]
mod robots_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::protected::Protected;
use crate::components::robot_filter::{FleetNode, RobotFilter, RobotType};
use crate::util::text::capitalize_first;

pub const FILTER_PATH: &str = "/filter";

/// Display name for a `/robots/{type}` param.
pub fn robot_type_label(param: &str) -> String {
    RobotType::from_slug(param).map_or_else(|| capitalize_first(param), |t| t.label().to_owned())
}

/// Display name for a `/nodes/{node}` param.
pub fn fleet_node_label(param: &str) -> String {
    FleetNode::from_slug(param).map_or_else(|| capitalize_first(param), |n| n.label().to_owned())
}

#[component]
pub fn RobotFilterPage() -> impl IntoView {
    view! {
        <Protected>
            <div class="page page--filter">
                <section class="dashboard-card">
                    <h2>"Filter Robots"</h2>
                    <p>"Pick a robot type or a fleet node, then press Select to open its page."</p>
                    <RobotFilter/>
                </section>
            </div>
        </Protected>
    }
}

#[component]
pub fn RobotTypePage() -> impl IntoView {
    let params = use_params_map();
    let label = move || robot_type_label(&params.with(|p| p.get("type").unwrap_or_default()));

    view! {
        <Protected>
            <div class="page page--detail">
                <section class="dashboard-card">
                    <h2>{label} " Robots"</h2>
                    <p>
                        "This page displays details about " {label}
                        " robots. Here you can find a list of robots that match this type."
                    </p>
                    <p class="placeholder">"Robot data will be displayed here (e.g., list of " {label} " robots)."</p>
                    <a href=FILTER_PATH class="back-link">
                        "Back to Filters"
                    </a>
                </section>
            </div>
        </Protected>
    }
}

#[component]
pub fn FleetNodePage() -> impl IntoView {
    let params = use_params_map();
    let label = move || fleet_node_label(&params.with(|p| p.get("node").unwrap_or_default()));

    view! {
        <Protected>
            <div class="page page--detail">
                <section class="dashboard-card">
                    <h2>"Robots at " {label} " Node"</h2>
                    <p>"This page displays details about robots operating at the " {label} " node."</p>
                    <p class="placeholder">"Robot data for the " {label} " node will be displayed here."</p>
                    <a href=FILTER_PATH class="back-link">
                        "Back to Filters"
                    </a>
                </section>
            </div>
        </Protected>
    }
}

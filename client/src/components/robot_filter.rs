//! Robot filter popover for the dashboard.
//!
//! DESIGN
//! ======
//! Selections are kept as an ordered set. Declaration order of
//! `FilterOption` is the navigation priority: robot types beat fleet nodes,
//! and within a group the first listed wins. "Select" navigates to the
//! highest-priority selection and stays put when nothing is selected.

#[cfg(test)]
#[path = "robot_filter_test.rs"]
mod robot_filter_test;

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RobotType {
    Autonomous,
    Manual,
    Hybrid,
}

impl RobotType {
    pub const ALL: [Self; 3] = [Self::Autonomous, Self::Manual, Self::Hybrid];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Autonomous => "autonomous",
            Self::Manual => "manual",
            Self::Hybrid => "hybrid",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Autonomous => "Autonomous",
            Self::Manual => "Manual",
            Self::Hybrid => "Hybrid",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug().eq_ignore_ascii_case(slug))
    }
}

/// Site where part of the fleet is stationed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FleetNode {
    Warehouse,
    Depot,
    Hub,
}

impl FleetNode {
    pub const ALL: [Self; 3] = [Self::Warehouse, Self::Depot, Self::Hub];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Warehouse => "warehouse",
            Self::Depot => "depot",
            Self::Hub => "hub",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warehouse => "Warehouse",
            Self::Depot => "Depot",
            Self::Hub => "Hub",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.slug().eq_ignore_ascii_case(slug))
    }
}

/// One checkbox in the filter popover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterOption {
    Type(RobotType),
    Node(FleetNode),
}

impl FilterOption {
    pub const TYPES: [Self; 3] = [
        Self::Type(RobotType::Autonomous),
        Self::Type(RobotType::Manual),
        Self::Type(RobotType::Hybrid),
    ];
    pub const NODES: [Self; 3] = [
        Self::Node(FleetNode::Warehouse),
        Self::Node(FleetNode::Depot),
        Self::Node(FleetNode::Hub),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Type(t) => t.label(),
            Self::Node(n) => n.label(),
        }
    }

    /// DOM id linking the checkbox to its label.
    #[must_use]
    pub fn input_id(self) -> String {
        match self {
            Self::Type(t) => format!("filter-type-{}", t.slug()),
            Self::Node(n) => format!("filter-node-{}", n.slug()),
        }
    }

    /// Route of the detail page for this option.
    #[must_use]
    pub fn route(self) -> String {
        match self {
            Self::Type(t) => format!("/robots/{}", t.slug()),
            Self::Node(n) => format!("/nodes/{}", n.slug()),
        }
    }
}

/// Checkbox selections in the filter popover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: BTreeSet<FilterOption>,
}

impl FilterState {
    #[must_use]
    pub fn is_selected(&self, option: FilterOption) -> bool {
        self.selected.contains(&option)
    }

    pub fn toggle(&mut self, option: FilterOption) {
        if !self.selected.remove(&option) {
            self.selected.insert(option);
        }
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    /// Route for the highest-priority selection, if any.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        self.selected.first().map(|option| option.route())
    }
}

#[component]
pub fn RobotFilter() -> impl IntoView {
    let filters = RwSignal::new(FilterState::default());
    let open = RwSignal::new(false);
    let navigate = use_navigate();

    let on_select = move |_| {
        open.set(false);
        if let Some(target) = filters.get_untracked().target() {
            navigate(&target, NavigateOptions::default());
        }
    };

    view! {
        <div class="robot-filter">
            <button
                class="btn robot-filter__trigger"
                aria-haspopup="dialog"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "Filter"
            </button>
            <Show when=move || open.get()>
                <div class="robot-filter__popover" role="dialog" aria-label="Robot filters">
                    <div class="robot-filter__groups">
                        <FilterGroup title="Type" options=&FilterOption::TYPES filters=filters/>
                        <FilterGroup title="Node" options=&FilterOption::NODES filters=filters/>
                    </div>
                    <div class="robot-filter__actions">
                        <button class="btn" on:click=move |_| filters.update(FilterState::reset)>
                            "Reset"
                        </button>
                        <button class="btn btn--primary" on:click=on_select.clone()>
                            "Select"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FilterGroup(title: &'static str, options: &'static [FilterOption], filters: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <fieldset class="robot-filter__group">
            <legend class="robot-filter__legend">{title}</legend>
            {options
                .iter()
                .map(|&option| {
                    view! {
                        <div class="robot-filter__option">
                            <input
                                type="checkbox"
                                id=option.input_id()
                                prop:checked=move || filters.with(|f| f.is_selected(option))
                                on:change=move |_| filters.update(|f| f.toggle(option))
                            />
                            <label for=option.input_id()>{option.label()}</label>
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

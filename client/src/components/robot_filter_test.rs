use super::*;

// =============================================================
// Slugs
// =============================================================

#[test]
fn robot_type_slug_round_trips() {
    for t in RobotType::ALL {
        assert_eq!(RobotType::from_slug(t.slug()), Some(t));
    }
    assert_eq!(RobotType::from_slug("HYBRID"), Some(RobotType::Hybrid));
    assert_eq!(RobotType::from_slug("bipedal"), None);
}

#[test]
fn fleet_node_slug_round_trips() {
    for n in FleetNode::ALL {
        assert_eq!(FleetNode::from_slug(n.slug()), Some(n));
    }
    assert_eq!(FleetNode::from_slug("port"), None);
}

#[test]
fn filter_option_routes() {
    assert_eq!(FilterOption::Type(RobotType::Autonomous).route(), "/robots/autonomous");
    assert_eq!(FilterOption::Node(FleetNode::Depot).route(), "/nodes/depot");
}

#[test]
fn filter_option_input_ids_are_unique() {
    let ids: BTreeSet<String> = FilterOption::TYPES
        .iter()
        .chain(FilterOption::NODES.iter())
        .map(|o| o.input_id())
        .collect();
    assert_eq!(ids.len(), 6);
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn empty_selection_has_no_target() {
    assert_eq!(FilterState::default().target(), None);
}

#[test]
fn toggle_selects_then_deselects() {
    let mut state = FilterState::default();
    let option = FilterOption::Node(FleetNode::Hub);
    state.toggle(option);
    assert!(state.is_selected(option));
    state.toggle(option);
    assert!(!state.is_selected(option));
    assert_eq!(state.target(), None);
}

#[test]
fn robot_type_outranks_fleet_node() {
    let mut state = FilterState::default();
    state.toggle(FilterOption::Node(FleetNode::Warehouse));
    state.toggle(FilterOption::Type(RobotType::Hybrid));
    assert_eq!(state.target().as_deref(), Some("/robots/hybrid"));
}

#[test]
fn priority_follows_listing_order_within_group() {
    let mut state = FilterState::default();
    state.toggle(FilterOption::Type(RobotType::Hybrid));
    state.toggle(FilterOption::Type(RobotType::Manual));
    assert_eq!(state.target().as_deref(), Some("/robots/manual"));

    let mut nodes = FilterState::default();
    nodes.toggle(FilterOption::Node(FleetNode::Hub));
    nodes.toggle(FilterOption::Node(FleetNode::Depot));
    assert_eq!(nodes.target().as_deref(), Some("/nodes/depot"));
}

#[test]
fn every_option_alone_targets_its_route() {
    for option in FilterOption::TYPES.into_iter().chain(FilterOption::NODES) {
        let mut state = FilterState::default();
        state.toggle(option);
        assert_eq!(state.target(), Some(option.route()));
    }
}

#[test]
fn reset_clears_all_selections() {
    let mut state = FilterState::default();
    for option in FilterOption::TYPES.into_iter().chain(FilterOption::NODES) {
        state.toggle(option);
    }
    state.reset();
    assert_eq!(state, FilterState::default());
    assert_eq!(state.target(), None);
}

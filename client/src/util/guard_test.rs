use super::*;

fn signed_in() -> AuthState {
    AuthState::resolved(Some("user".to_owned()))
}

// =============================================================
// is_protected
// =============================================================

#[test]
fn gated_roots_are_protected() {
    for path in ["/dashboard", "/fleet", "/filter", "/robots/autonomous", "/nodes/depot"] {
        assert!(is_protected(path), "expected {path} to be protected");
    }
}

#[test]
fn public_pages_are_not_protected() {
    for path in ["/", "/about", "/product", "/solution", "/details", "/login"] {
        assert!(!is_protected(path), "expected {path} to be public");
    }
}

#[test]
fn protection_ignores_query_fragment_and_trailing_slash() {
    assert!(is_protected("/dashboard?tab=1"));
    assert!(is_protected("/fleet#benefits"));
    assert!(is_protected("/dashboard/"));
}

#[test]
fn protection_matches_whole_segments_only() {
    assert!(!is_protected("/dashboards"));
    assert!(!is_protected("/fleetwide"));
}

// =============================================================
// check_route
// =============================================================

#[test]
fn anonymous_visit_to_protected_route_redirects_with_requested_path() {
    assert_eq!(
        check_route("/fleet", &AuthState::anonymous()),
        GuardDecision::Redirect("/login?redirect=%2Ffleet".to_owned())
    );
}

#[test]
fn redirect_preserves_query_string() {
    assert_eq!(
        check_route("/robots/hybrid?view=grid", &AuthState::anonymous()),
        GuardDecision::Redirect("/login?redirect=%2Frobots%2Fhybrid%3Fview%3Dgrid".to_owned())
    );
}

#[test]
fn signed_in_visit_is_allowed() {
    assert_eq!(check_route("/dashboard", &signed_in()), GuardDecision::Allow);
}

#[test]
fn pending_session_neither_allows_nor_redirects() {
    assert_eq!(check_route("/dashboard", &AuthState::pending()), GuardDecision::Pending);
}

#[test]
fn public_route_is_always_allowed() {
    assert_eq!(check_route("/product", &AuthState::anonymous()), GuardDecision::Allow);
    assert_eq!(check_route("/product", &AuthState::pending()), GuardDecision::Allow);
}

#[test]
fn logout_then_guard_check_redirects_to_login() {
    let mut state = signed_in();
    assert_eq!(check_route("/dashboard", &state), GuardDecision::Allow);
    state = AuthState::anonymous();
    assert_eq!(
        check_route("/dashboard", &state),
        GuardDecision::Redirect("/login?redirect=%2Fdashboard".to_owned())
    );
}

// =============================================================
// requested_path
// =============================================================

#[test]
fn requested_path_joins_search_with_or_without_question_mark() {
    assert_eq!(requested_path("/fleet", ""), "/fleet");
    assert_eq!(requested_path("/fleet", "a=1"), "/fleet?a=1");
    assert_eq!(requested_path("/fleet", "?a=1"), "/fleet?a=1");
}

// =============================================================
// post_login_target / check_login_route
// =============================================================

#[test]
fn post_login_target_uses_preserved_path() {
    assert_eq!(post_login_target(Some("/fleet")), "/fleet");
    assert_eq!(post_login_target(Some("/robots/manual?x=1")), "/robots/manual?x=1");
}

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), "/dashboard");
    assert_eq!(post_login_target(Some("")), "/dashboard");
    assert_eq!(post_login_target(Some("   ")), "/dashboard");
}

#[test]
fn post_login_target_rejects_offsite_and_login_targets() {
    assert_eq!(post_login_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("//evil.example/path")), "/dashboard");
    assert_eq!(post_login_target(Some("/\\evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("/login")), "/dashboard");
    assert_eq!(post_login_target(Some("/login?redirect=%2Ffleet")), "/dashboard");
    assert_eq!(post_login_target(Some("/\t/evil.example/x")), "/dashboard");
    assert_eq!(post_login_target(Some("/\n/evil.example/x")), "/dashboard");
    assert_eq!(post_login_target(Some("/\r\n/evil.example")), "/dashboard");
}

#[test]
fn return_path_rejects_embedded_control_and_whitespace() {
    for target in ["/\t/evil.example", "/fleet\u{0}", "/robots/ hybrid", "/nodes/\u{2028}hub", "/\u{7f}/x"] {
        assert!(!is_safe_return_path(target), "expected {target:?} to be rejected");
    }
    assert!(is_safe_return_path("/robots/hybrid?view=grid"));
}

#[test]
fn redirect_round_trips_through_url_decoding() {
    let GuardDecision::Redirect(url) = check_route("/nodes/hub?from=filter", &AuthState::anonymous()) else {
        panic!("expected redirect");
    };
    let encoded = url.strip_prefix("/login?redirect=").unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    assert_eq!(post_login_target(Some(&decoded)), "/nodes/hub?from=filter");
}

#[test]
fn login_page_renders_for_anonymous_or_pending() {
    assert_eq!(check_login_route(&AuthState::anonymous(), None), GuardDecision::Allow);
    assert_eq!(check_login_route(&AuthState::pending(), Some("/fleet")), GuardDecision::Allow);
}

#[test]
fn login_page_forwards_signed_in_visitor() {
    assert_eq!(
        check_login_route(&signed_in(), None),
        GuardDecision::Redirect("/dashboard".to_owned())
    );
    assert_eq!(
        check_login_route(&signed_in(), Some("/fleet")),
        GuardDecision::Redirect("/fleet".to_owned())
    );
}

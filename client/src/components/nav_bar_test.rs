use super::*;

#[test]
fn menu_toggle_label_tracks_state() {
    assert_eq!(menu_toggle_label(false), "Open menu");
    assert_eq!(menu_toggle_label(true), "Close menu");
}

#[test]
fn public_links_exclude_gated_routes() {
    for (href, _) in PUBLIC_LINKS {
        assert!(!crate::util::guard::is_protected(href), "{href} should be public");
    }
}

#[test]
fn member_links_are_all_gated() {
    for (href, _) in MEMBER_LINKS {
        assert!(crate::util::guard::is_protected(href), "{href} should be gated");
    }
}

#[test]
fn logout_lands_on_public_page() {
    assert!(!crate::util::guard::is_protected(LOGOUT_TARGET));
}

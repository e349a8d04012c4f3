use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn parse_port_rejects_out_of_range() {
    let err = parse_port(Some("70000")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
    assert!(err.to_string().contains("70000"));
}

#[test]
fn parse_port_rejects_non_numeric() {
    assert!(parse_port(Some("http")).is_err());
}

#[test]
fn parse_host_defaults_to_all_interfaces() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_HOST);
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_host(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_host_rejects_hostnames() {
    let err = parse_host(Some("localhost")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "HOST", .. }));
}

#[test]
fn from_lookup_uses_defaults_for_empty_environment() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_reads_all_overrides() {
    let cfg =
        ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "4000"), ("SITE_ROOT", "dist/site")]))
            .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:4000".parse().unwrap());
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist/site")));
}

#[test]
fn from_lookup_ignores_blank_site_root() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SITE_ROOT", "   ")])).unwrap();
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_propagates_port_error() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "-1")])).is_err());
}

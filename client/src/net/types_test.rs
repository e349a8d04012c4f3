use super::*;

#[test]
fn home_data_serializes_camel_case() {
    let home = HomeData {
        name: "Anscer Robotics".to_owned(),
        tagline: "t".to_owned(),
        description: "d".to_owned(),
        hero_image_url: "https://img".to_owned(),
        key_feature: "k".to_owned(),
    };
    let json = serde_json::to_value(&home).unwrap();
    assert_eq!(json["heroImageUrl"], "https://img");
    assert_eq!(json["keyFeature"], "k");
    assert!(json.get("hero_image_url").is_none());
}

#[test]
fn solution_details_parses_use_cases_from_json() {
    let json = serde_json::json!({
        "industries": ["Event Security"],
        "useCases": [{
            "title": "Public Event Monitoring",
            "scenario": "Crowd management",
            "name": "Ankit Singh",
            "description": "Great"
        }],
        "impact": ["Faster response"]
    });
    let details: SolutionDetails = serde_json::from_value(json).unwrap();
    assert_eq!(details.use_cases.len(), 1);
    assert_eq!(details.use_cases[0].name, "Ankit Singh");
    assert_eq!(details.impact, vec!["Faster response".to_owned()]);
}

#[test]
fn fleet_data_uses_roboguard_role_key() {
    let fleet = FleetData {
        title: String::new(),
        intro: String::new(),
        roboguard_role: "role".to_owned(),
        benefits: Vec::new(),
        image_url: String::new(),
    };
    let json = serde_json::to_value(&fleet).unwrap();
    assert_eq!(json["roboguardRole"], "role");
    assert_eq!(json["imageUrl"], "");
}

//! Page content DTOs returned by the mock fetchers.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the literal content could be served
//! as JSON by a real backend without reshaping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Titled blurb used by product, details, and about pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    pub(crate) fn new(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned() }
    }
}

/// Landing page hero content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub hero_image_url: String,
    pub key_feature: String,
}

/// Company background for the about page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub mission: String,
    pub story: String,
    pub values: Vec<Feature>,
}

/// Product overview content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub image_url: String,
    pub features: Vec<Feature>,
    pub key_features: Vec<String>,
    pub future_improvements: Vec<String>,
}

/// Deployment scenario paired with a customer testimonial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub title: String,
    pub scenario: String,
    /// Name of the customer quoted in `description`.
    pub name: String,
    /// Testimonial text.
    pub description: String,
}

/// Solutions page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionDetails {
    pub industries: Vec<String>,
    pub use_cases: Vec<UseCase>,
    pub impact: Vec<String>,
}

/// Technical deep-dive content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductExtraDetails {
    pub extended_features: Vec<Feature>,
    pub technology_stack: Vec<String>,
    pub security_protocols: Vec<String>,
}

/// Fleet page content, shown behind the login gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetData {
    pub title: String,
    pub intro: String,
    pub roboguard_role: String,
    pub benefits: Vec<String>,
    pub image_url: String,
}

//! Mock content fetchers standing in for a backend.
//!
//! Client-side (hydrate): each fetch sleeps for [`MOCK_LATENCY`] to simulate
//! a network round trip before returning literal data.
//! Server-side (SSR) and tests: the literal data is returned immediately.
//!
//! ERROR HANDLING
//! ==============
//! There is no I/O behind these functions, so they cannot fail and return
//! plain values rather than `Result`s.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{
    AboutData, Feature, FleetData, HomeData, ProductDetails, ProductExtraDetails, SolutionDetails, UseCase,
};

/// Artificial delay applied to every mock fetch in the browser.
pub const MOCK_LATENCY: Duration = Duration::from_millis(500);

async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(MOCK_LATENCY).await;
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Content for `/`.
pub async fn fetch_home() -> HomeData {
    simulate_latency().await;
    HomeData {
        name: "Anscer Robotics".to_owned(),
        tagline: "The Future of Autonomous Security".to_owned(),
        description: "Discover Anscer Robotics, the cutting-edge robotic security system designed to protect \
                      homes, offices, and industrial facilities with unparalleled intelligence and precision."
            .to_owned(),
        hero_image_url: "https://images.pexels.com/photos/9242858/pexels-photo-9242858.jpeg?auto=compress&cs=tinysrgb&w=600"
            .to_owned(),
        key_feature: "Real-time threat detection with 99.9% accuracy".to_owned(),
    }
}

/// Content for `/about`.
pub async fn fetch_about() -> AboutData {
    simulate_latency().await;
    AboutData {
        mission: "Anscer Robotics builds autonomous security robots that keep people out of harm's way while \
                  keeping facilities watched around the clock."
            .to_owned(),
        story: "What started as a warehouse patrol prototype grew into Robotics Guard, a fleet-ready platform \
                combining AI threat detection, 360-degree sensing, and autonomous navigation for homes, \
                offices, and industrial sites."
            .to_owned(),
        values: vec![
            Feature::new(
                "Safety First",
                "Robots take on the risky rounds so security teams can focus on response.",
            ),
            Feature::new(
                "Always Improving",
                "Over-the-air updates deliver new detection models and patches to every unit.",
            ),
            Feature::new(
                "Built to Integrate",
                "Open interfaces connect patrols to existing smart-building and command systems.",
            ),
        ],
    }
}

/// Content for `/product`.
pub async fn fetch_product() -> ProductDetails {
    simulate_latency().await;
    ProductDetails {
        name: "Robotics Guard".to_owned(),
        tagline: "The Future of Autonomous Security".to_owned(),
        description: "Robotics Guard is an advanced robotic security system designed to provide unparalleled \
                      protection and surveillance for homes, offices, and industrial facilities."
            .to_owned(),
        image_url: "https://images.pexels.com/photos/19233057/pexels-photo-19233057/free-photo-of-assembling-machines-in-factory.jpeg?auto=compress&cs=tinysrgb&w=600"
            .to_owned(),
        features: vec![
            Feature::new(
                "Advanced AI",
                "Powered by cutting-edge artificial intelligence, RoboGuard can detect and analyze potential \
                 threats in real-time with 99.9% accuracy.",
            ),
            Feature::new(
                "360° Surveillance",
                "Equipped with high-definition cameras and omnidirectional sensors, RoboGuard provides complete \
                 coverage of its surroundings.",
            ),
            Feature::new(
                "Autonomous Navigation",
                "Navigate complex environments effortlessly with advanced pathfinding algorithms and obstacle \
                 avoidance technology.",
            ),
        ],
        key_features: strings(&[
            "Real-time threat detection and alerts",
            "Seamless integration with smart home systems",
            "24/7 cloud-based monitoring and data storage",
            "Customizable patrol routes and schedules",
            "Voice-activated commands and remote control via mobile app",
        ]),
        future_improvements: strings(&[
            "Enhanced AI Capabilities: Improved threat detection and decision-making through machine learning.",
            "Extended Battery Life: Next-generation batteries for longer operational times.",
            "Modular Design: Easily upgradable components for enhanced customization.",
            "Swarm Technology: Coordinated operation of multiple RoboGuard units for large-scale deployments.",
            "Improved Durability: Weather-resistant materials and self-diagnostic systems for increased reliability.",
        ]),
    }
}

/// Content for `/solution`.
pub async fn fetch_solution() -> SolutionDetails {
    simulate_latency().await;
    let use_case = |title: &str, scenario: &str, name: &str, description: &str| UseCase {
        title: title.to_owned(),
        scenario: scenario.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
    };
    SolutionDetails {
        industries: strings(&[
            "Residential Security",
            "Corporate Campuses",
            "Industrial Facilities",
            "Public Infrastructure",
            "Event Security",
        ]),
        use_cases: vec![
            use_case(
                "Nighttime Office Surveillance",
                "RoboGuard autonomously patrols office buildings after hours, detecting unauthorized access and \
                 notifying security teams in real-time.",
                "Nitin Singh",
                "I have been using RoboGuard for a few months now, and this is the best product I have ever used. \
                 It has changed my life!",
            ),
            use_case(
                "Warehouse Intrusion Prevention",
                "Detects motion in off-limits areas and activates deterrent alerts to prevent break-ins.",
                "Ashwanee Gupta",
                "This Robotics Guard is a game-changer for our security operations. The AI capabilities are \
                 impressive, and the real-time alerts have made a significant difference in our response times.",
            ),
            use_case(
                "Public Event Monitoring",
                "Provides real-time surveillance and crowd management during large public events, ensuring \
                 safety and security.",
                "Ankit Singh",
                "Robotics Guard has transformed our security operations. The AI capabilities are impressive, and \
                 the real-time alerts have made a significant difference in our response times.",
            ),
            use_case(
                "Residential Neighborhood Patrol",
                "Autonomously patrols residential areas, providing peace of mind to homeowners and deterring \
                 potential threats.",
                "Shivam Tiwari",
                "We have been using Robotics Guard for a few months now, and this is the best product I have ever \
                 used. It has changed my life!",
            ),
            use_case(
                "Construction Site Security",
                "Monitors construction sites for unauthorized access and equipment theft, ensuring safety and \
                 security.",
                "Ravi Kumar",
                "Our Organization has been using Robotics Guard for a few months now, and this is the best product \
                 I have ever used. It has changed my life!",
            ),
        ],
        impact: strings(&[
            "Reduced operational security costs by up to 40%",
            "Faster incident response with real-time threat notifications",
            "Higher deterrent rate thanks to visible autonomous patrolling",
            "Improved safety and peace of mind in residential areas",
        ]),
    }
}

/// Content for `/details`.
pub async fn fetch_details() -> ProductExtraDetails {
    simulate_latency().await;
    ProductExtraDetails {
        extended_features: vec![
            Feature::new(
                "AI Threat Classification",
                "Categorizes threats based on behavior, urgency, and location in real-time.",
            ),
            Feature::new(
                "Remote Firmware Updates",
                "Stay up-to-date with the latest features and patches delivered over-the-air.",
            ),
            Feature::new(
                "Secure Data Sync",
                "Encrypted cloud synchronization to protect user data and system logs.",
            ),
        ],
        technology_stack: strings(&[
            "Edge AI Processing Units",
            "High-Fidelity LIDAR Sensors",
            "End-to-End Encrypted Communication",
            "Rust + Leptos Frontend",
            "Cloud-native Microservices (AWS Lambda)",
        ]),
        security_protocols: strings(&[
            "AES-256 Encryption",
            "Zero Trust Architecture",
            "Two-Factor Authentication (2FA)",
            "Intrusion Detection & Logging",
        ]),
    }
}

/// Content for `/fleet`.
pub async fn fetch_fleet() -> FleetData {
    simulate_latency().await;
    FleetData {
        title: "Autonomous Robot Fleets for Next-Gen Security".to_owned(),
        intro: "Fleets of autonomous security robots redefine protection for industrial complexes, data centers, \
                and logistics hubs through decentralized control and intelligent task management. Operating as a \
                networked system, these robots dynamically adapt to environmental changes, ensuring resilient and \
                flexible security coverage across diverse operational landscapes."
            .to_owned(),
        roboguard_role: "Robotics Guard's autonomous fleets are engineered for adaptive security, utilizing \
                         real-time analytics and modular task allocation to manage complex operations. Each robot \
                         in the fleet processes environmental data independently, enabling decentralized \
                         decision-making that optimizes patrol routes, prioritizes alerts, and integrates with \
                         central command systems. This approach ensures high responsiveness and tailored security \
                         for facilities of any scale."
            .to_owned(),
        benefits: strings(&[
            "Dynamic Rerouting: Robots adjust patrol paths in real-time to address emerging threats or obstacles.",
            "Predictive Maintenance: Built-in diagnostics anticipate and schedule maintenance, minimizing downtime.",
            "Energy Optimization: Intelligent power management extends operational hours across the fleet.",
            "Customizable Operations: Modular configurations allow fleets to adapt to specific security protocols.",
            "Data-Driven Insights: Aggregated analytics provide actionable intelligence for security enhancements.",
        ]),
        image_url: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=600"
            .to_owned(),
    }
}

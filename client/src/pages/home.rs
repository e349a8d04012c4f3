//! Landing page: hero, feature teaser, and the robotics narrative.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::api;
use crate::net::cache::use_cached_content;
use crate::net::types::HomeData;

/// Static text-and-image section below the hero.
struct NarrativeSection {
    title: &'static str,
    body: &'static str,
    image_url: &'static str,
    image_alt: &'static str,
}

const NARRATIVE: &[NarrativeSection] = &[
    NarrativeSection {
        title: "About Robots",
        body: "Robots are advanced machines engineered to perform tasks with precision and efficiency. \
               Systems like Anscer Robotics leverage cutting-edge AI, sensors, and automation to provide \
               security and operational solutions. Industrial robots, including articulated robots, \
               automated guided vehicles (AGVs), and pallet lifter robots, transform manufacturing, \
               logistics, and security by automating repetitive tasks, enhancing safety, and improving \
               productivity across various sectors.",
        image_url: "https://images.pexels.com/photos/1632790/pexels-photo-1632790.jpeg?auto=compress&cs=tinysrgb&w=600",
        image_alt: "Industrial robotic arm in action",
    },
    NarrativeSection {
        title: "How Robotics Industry Works",
        body: "The robotics industry integrates engineering, AI, and software to create intelligent \
               machines. It involves research, design, manufacturing, and deployment of robots tailored \
               to specific needs, such as security systems like Anscer Robotics. Companies collaborate \
               with system integrators to embed robots into operational workflows, using IoT and data \
               analytics for seamless performance. Continuous innovation in machine learning and sensor \
               technology drives the industry, enabling robots to handle complex tasks autonomously.",
        image_url: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=600",
        image_alt: "Robotics manufacturing lab",
    },
    NarrativeSection {
        title: "How Robotics Security Works",
        body: "Robotics security, as exemplified by Anscer Robotics, uses advanced sensors (e.g., cameras, \
               LIDAR) and AI to monitor environments in real-time. These systems detect threats, such as \
               unauthorized access or anomalies, with high accuracy. Secure communication protocols and \
               regular software updates protect against cyber threats, while autonomous response \
               capabilities ensure rapid action. By reducing human exposure to risks, robotic security \
               enhances safety in homes, offices, and industrial facilities.",
        image_url: "https://robotnik.eu/wp-content/uploads/2023/06/RB-WATCHER_ROBOTNIK_2-scaled.jpg",
        image_alt: "Security robot patrolling",
    },
    NarrativeSection {
        title: "How Robots Can Help Us",
        body: "Robots like Anscer Robotics revolutionize security and efficiency. They automate \
               surveillance, reduce operational costs, and enhance safety by handling dangerous tasks. In \
               broader applications, robots streamline manufacturing, optimize logistics, and support \
               healthcare, minimizing errors and worker injuries. By integrating with smart systems, \
               robots promote sustainability and drive innovation, augmenting human capabilities to \
               create safer, more productive environments.",
        image_url: "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg?auto=compress&cs=tinysrgb&w=600",
        image_alt: "Collaborative robots in industry",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let data = use_cached_content(api::fetch_home);

    view! {
        <div class="page page--home">
            {move || match data.get() {
                Some(home) => view! { <HomeContent home=home/> }.into_any(),
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn HomeContent(home: HomeData) -> impl IntoView {
    let HomeData { name, tagline, description, hero_image_url, key_feature } = home;

    view! {
        <header class="page-header">
            <h1>{name.clone()}</h1>
            <p class="page-header__tagline">{tagline}</p>
        </header>

        <section class="split">
            <div class="split__text">
                <h2>"Welcome to " {name.clone()}</h2>
                <p>{description}</p>
                <a href="/about" class="btn btn--primary" aria-label="Learn More About Anscer Robotics">
                    "Learn More"
                </a>
            </div>
            <div class="split__media">
                <img src=hero_image_url alt=name/>
            </div>
        </section>

        <section class="teaser">
            <h3>"Why Choose Anscer Robotics?"</h3>
            <p>{key_feature}</p>
            <a href="/about" class="btn btn--primary" aria-label="Explore All Features">
                "Explore All Features"
            </a>
        </section>

        {NARRATIVE
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let class = if index % 2 == 1 { "split split--reverse" } else { "split" };
                view! {
                    <section class=class>
                        <div class="split__text">
                            <h2>{section.title}</h2>
                            <p>{section.body}</p>
                        </div>
                        <div class="split__media">
                            <img src=section.image_url alt=section.image_alt/>
                        </div>
                    </section>
                }
            })
            .collect_view()}

        <section class="teaser">
            <a href="/about" class="btn btn--primary" aria-label="Learn More About Robotics">
                "Learn More"
            </a>
        </section>
    }
}

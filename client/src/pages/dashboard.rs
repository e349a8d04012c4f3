//! Robot dashboard: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `Protected`. The header hosts the robot filter and a
//! sign-out button that returns to `/login`; the body is static explainer
//! content followed by the site footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::protected::Protected;
use crate::components::robot_filter::RobotFilter;
use crate::components::site_footer::SiteFooter;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::guard::LOGIN_PATH;

/// Bulleted explainer block: heading, lead-in, and `(term, detail)` pairs.
struct Explainer {
    title: &'static str,
    lead: &'static str,
    points: &'static [(&'static str, &'static str)],
}

const EXPLAINERS: &[Explainer] = &[
    Explainer {
        title: "How Robots Work",
        lead: "Robots are intelligent machines that interact with their environment through a combination of \
               sensors, actuators, and control systems:",
        points: &[
            ("Sensors", "Detect environmental data (e.g., cameras, LIDAR, ultrasonic sensors) to perceive surroundings."),
            ("Actuators", "Enable movement or manipulation (e.g., motors, servos, hydraulic systems)."),
            (
                "Control Systems",
                "Process sensor data and make decisions using algorithms or AI (e.g., microcontrollers, onboard computers).",
            ),
        ],
    },
    Explainer {
        title: "Robot Functionality",
        lead: "Robots perform a wide range of tasks depending on their design and purpose:",
        points: &[
            ("Navigation", "Autonomous movement in environments (e.g., self-driving cars, delivery drones)."),
            ("Manipulation", "Handling objects (e.g., robotic arms in manufacturing)."),
            ("Interaction", "Communicating with humans or other systems (e.g., chatbots, social robots)."),
        ],
    },
    Explainer {
        title: "Robot Mechanics",
        lead: "The mechanical design of robots determines their physical capabilities:",
        points: &[
            (
                "Joints",
                "Enable rotation or linear movement (e.g., revolute joints for arms, prismatic joints for sliding).",
            ),
            ("Motors", "Provide power for movement (e.g., DC motors, stepper motors)."),
            (
                "Materials",
                "Lightweight yet durable materials (e.g., aluminum, carbon fiber) ensure efficiency and strength.",
            ),
        ],
    },
];

/// `(type, primary use, key features, examples)`
const COMPARISON: &[[&str; 4]] = &[
    ["Industrial", "Manufacturing", "High precision, repetitive tasks", "KUKA, FANUC"],
    [
        "Humanoid",
        "Research, Assistance",
        "Human-like movement, interaction",
        "Boston Dynamics Atlas, SoftBank Pepper",
    ],
    ["Service", "Domestic, Healthcare", "Autonomy, user-friendly interfaces", "Roomba, Da Vinci Surgical System"],
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <DashboardContent/>
        </Protected>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        store.sign_out(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Robot Dashboard"</h1>
                <div class="dashboard__actions">
                    <span class="dashboard__user">{move || auth.get().user.unwrap_or_default()}</span>
                    <RobotFilter/>
                    <button class="btn btn--danger" type="button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <div class="dashboard__body">
                <section class="dashboard-card">
                    <h2>"Welcome to the Robot Dashboard"</h2>
                    <p>
                        "Dive into the exciting world of robotics! Discover how robots operate, their diverse \
                         functions, intricate mechanics, and how they stack up against one another."
                    </p>
                </section>

                {EXPLAINERS
                    .iter()
                    .map(|explainer| {
                        view! {
                            <section class="dashboard-card">
                                <h2>{explainer.title}</h2>
                                <p>{explainer.lead}</p>
                                <ul class="bullet-list">
                                    {explainer
                                        .points
                                        .iter()
                                        .map(|&(term, detail)| {
                                            view! {
                                                <li>
                                                    <strong>{term}</strong>
                                                    ": "
                                                    {detail}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()}

                <section class="dashboard-card">
                    <h2>"Comparison of Robots"</h2>
                    <p>"Different robots serve unique purposes. Here's a comparison:"</p>
                    <div class="table-scroll">
                        <table class="comparison-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"Primary Use"</th>
                                    <th>"Key Features"</th>
                                    <th>"Examples"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {COMPARISON
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr>{row.iter().map(|&cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </section>
            </div>

            <SiteFooter/>
        </div>
    }
}

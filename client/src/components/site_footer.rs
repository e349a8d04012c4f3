//! Footer with social links, shown on the dashboard.

use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "https://twitter.com"),
    ("LinkedIn", "https://www.linkedin.com/in/nitinneyoo/"),
    ("GitHub", "https://github.com/Nitinneyoo"),
    ("Instagram", "https://www.instagram.com/neyooo_27/"),
];

const SHARE_MAIL: &str =
    "mailto:?subject=Check out Robot Dashboard&body=Explore the world of robotics: https://robotdashboard.com";

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copyright">"© 2025 RobotTech Inc. All rights reserved."</p>
            <nav class="site-footer__dock" aria-label="Social links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="site-footer__link" href=*href target="_blank" rel="noopener noreferrer">
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
                <a class="site-footer__link" href=SHARE_MAIL>
                    "Mail"
                </a>
            </nav>
        </footer>
    }
}

//! Footer Component

use leptos::prelude::*;

use crate::router::{Link, Route};

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/CoderUzumaki/The-Project-Catalog"),
    ("X", "https://x.com/coderUzumaki"),
    ("LinkedIn", "https://www.linkedin.com/in/abhinavvv08"),
    ("Email", "mailto:astar1013vt@gmail.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="logo-text">"DevHub"</span>
                    <p>"An Initiative by Team dUnder Pressure for the hack4odisha open track"</p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href)| view! {
                                <a href=*href target="_blank" rel="noopener noreferrer">{*label}</a>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><Link to=Route::Home>"Home"</Link></li>
                        <li><Link to=Route::About>"About"</Link></li>
                        <li><Link to=Route::Ideas>"Explore"</Link></li>
                    </ul>
                </div>
                <div>
                    <h3>"Support"</h3>
                    <ul>
                        <li><Link to=Route::Contact>"Contact Us"</Link></li>
                        <li><a href="#">"Help Center"</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 DevHub. All rights reserved."</p>
                <div class="legal-links">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}

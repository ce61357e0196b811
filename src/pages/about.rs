//! About Page

use leptos::prelude::*;

use crate::router::{Link, Route};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember { name: "Abhinav Mishra", role: "Full Stack Developer", image: "/abhinav.jpg" },
    TeamMember { name: "Pratyu Deheria", role: "Frontend Developer", image: "/pratyu.jpg" },
    TeamMember { name: "Nishant Borkar", role: "Backend Developer", image: "/nishant.jpg" },
];

const STATS: &[(&str, &str)] = &[
    ("5+", "Years of Innovation"),
    ("500+", "Projects Launched"),
    ("50+", "Tech Experts"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="hero">
                <h1>"Our Story, the Journey That's Shaped " <span class="accent">"Our"</span> " Success"</h1>
                <p>
                    "DevHub was born from a simple belief: that great ideas deserve great platforms. We're
                    building the future of tech collaboration, one project at a time."
                </p>
            </section>

            <section class="stats">
                <h2>"Our platform drives innovation worldwide"</h2>
                <div class="stat-grid">
                    {STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <span class="stat-value">{*value}</span>
                                <span class="muted">{*label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="team">
                <h2>"Creative Team"</h2>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .map(|member| view! {
                            <div class="team-member">
                                <img src=member.image alt=member.name/>
                                <h3>{member.name}</h3>
                                <p class="muted">{member.role}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to innovate with us? Let's build something amazing together"</h2>
                <Link to=Route::SignUp class="btn btn-primary btn-large">"Get Started"</Link>
            </section>
        </div>
    }
}

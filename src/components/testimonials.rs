//! Testimonials Section

use leptos::prelude::*;

pub struct Testimonial {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub image: Option<&'static str>,
    pub content: &'static str,
    /// Shown large in its own column
    pub featured: bool,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Satwik Sahu",
        initials: "SS",
        role: "Software Engineer",
        image: Some("https://randomuser.me/api/portraits/men/1.jpg"),
        content: "DevHub completely transformed how I approach side projects. The curated challenges pushed me to learn new technologies and build things I never thought I could.",
        featured: false,
    },
    Testimonial {
        name: "Pratham Malu",
        initials: "PM",
        role: "Frontend Developer",
        image: Some("https://randomuser.me/api/portraits/men/3.jpg"),
        content: "An essential platform for any developer looking to build a standout portfolio. The project ideas are unique and actually impressive to recruiters.",
        featured: false,
    },
    Testimonial {
        name: "Anvi Patel",
        initials: "AP",
        role: "Full Stack Developer",
        image: Some("https://randomuser.me/api/portraits/women/1.jpg"),
        content: "I love how easy it is to find projects that match my skill level. The community showcases gave me so much inspiration for my own implementations.",
        featured: false,
    },
    Testimonial {
        name: "Jaya Desai",
        initials: "JD",
        role: "Software Engineer",
        image: Some("https://randomuser.me/api/portraits/women/3.jpg"),
        content: "DevHub helped me land my dream job at a top tech company. The projects I built here became the centerpiece of my portfolio and interview discussions.",
        featured: false,
    },
    Testimonial {
        name: "Jayanti Jha",
        initials: "JJ",
        role: "Software Engineer",
        image: Some("https://randomuser.me/api/portraits/women/2.jpg"),
        content: "The filtering by tech stack feature has been a game-changer for my learning journey. I can focus on projects that help me master specific technologies.",
        featured: true,
    },
];

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let class = if testimonial.featured { "testimonial featured" } else { "testimonial" };
    let avatar = match testimonial.image {
        Some(src) => view! { <img class="avatar" src=src alt=testimonial.name/> }.into_any(),
        None => view! { <span class="avatar">{testimonial.initials}</span> }.into_any(),
    };

    view! {
        <div class=class>
            <p class="quote">"\u{201c}" {testimonial.content} "\u{201d}"</p>
            <div class="testimonial-author">
                {avatar}
                <div>
                    <p class="author-name">{testimonial.name}</p>
                    <p class="muted">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let (featured, regular): (Vec<_>, Vec<_>) = TESTIMONIALS.iter().partition(|t| t.featured);

    view! {
        <section class="testimonials">
            <span class="badge">"Testimonials"</span>
            <h2>"Developers just like you" <span class="block">"are already using DevHub"</span></h2>
            <div class="testimonial-grid">
                <div class="testimonial-column">
                    {regular.into_iter().map(|t| view! { <TestimonialCard testimonial=t/> }).collect_view()}
                </div>
                <div class="testimonial-column">
                    {featured.into_iter().map(|t| view! { <TestimonialCard testimonial=t/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod footer;
mod idea_card;
mod project_card;
mod testimonials;
mod status;
mod form_field;

pub use header::Header;
pub use footer::Footer;
pub use idea_card::IdeaCardView;
pub use project_card::ProjectCardView;
pub use testimonials::Testimonials;
pub use status::{ErrorPanel, LoadingSpinner};
pub use form_field::FormField;

//! Pages
//!
//! One component per route.

mod landing;
mod explore;
mod idea_detail;
mod project_detail;
mod auth;
mod profile;
mod about;
mod contact;
mod not_found;

pub use landing::LandingPage;
pub use explore::ExplorePage;
pub use idea_detail::IdeaDetailPage;
pub use project_detail::ProjectDetailPage;
pub use auth::{LoginPage, SignUpPage};
pub use profile::ProfilePage;
pub use about::AboutPage;
pub use contact::ContactPage;
pub use not_found::NotFoundPage;

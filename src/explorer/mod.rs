//! Idea Explorer Controller
//!
//! Filter, pagination and like state of the explore page, kept apart from
//! the view so every transition is unit-testable.

mod filters;
mod state;

pub use filters::FilterPatch;
pub use state::{ExplorerState, ExplorerStateStoreFields, LikeAction, LoadOutcome, LoadTicket};

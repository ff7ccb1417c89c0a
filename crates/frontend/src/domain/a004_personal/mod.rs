pub mod api;
pub mod state;

pub use state::{create_state, PersonalState};

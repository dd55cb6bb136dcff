pub mod action;
pub mod health;

pub use action::{ActionRequest, ActionResponse, decide};
pub use health::health;

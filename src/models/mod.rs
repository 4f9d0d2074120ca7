//! Domain models for Mergington Activities.
//!
//! - [`Activity`]: an extracurricular offering with its schedule, advisory
//!   capacity and participant roster. Activities are keyed by display name.
//! - [`SignupQuery`]: the `?email=` query accepted by signup and unregister.
//! - [`MessageResponse`] and [`ErrorDetail`]: JSON bodies returned to clients.

mod activity;
mod response;

pub use activity::*;
pub use response::*;

//! Systems that run inside a sub-step: broad phase, collision response and
//! integration.

pub mod broad_phase;
pub mod collision;
pub mod integrator;

pub use broad_phase::{solve_grid, BroadPhaseStats};
pub use collision::Contact;
pub use integrator::integrate;

//! Domain types: bodies, the body store, configuration and errors.

pub mod body;
pub mod config;
pub mod error;
pub mod store;

pub use body::{Body, BodyDesc, BodyId};
pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use store::BodyStore;

//! Collision - narrow-phase AABB test and impulse response.
//!
//! Bodies are non-rotating boxes, so the narrow phase reduces to a per-axis
//! overlap test and the response to a single impulse along one axis.

mod narrow_phase;
mod resolver;
mod types;

pub use narrow_phase::test_overlap;
pub use resolver::{pair_mut, resolve_dynamic, resolve_static};
pub use types::Contact;

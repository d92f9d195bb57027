//! Core building blocks shared by every system: math, transient storage.

pub mod arena;
pub mod bitset;
pub mod vec2;

pub use arena::{NodeArena, NIL};
pub use bitset::PairBitset;
pub use vec2::Vec2;

//! Streaming hashing engine.
//!
//! - [`Hasher`] - stateful accumulator that processes streaming bytes

mod engine;
mod trailing;

pub use engine::Hasher;

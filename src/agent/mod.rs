//! Conversation loop engine

mod engine;

pub use engine::Agent;

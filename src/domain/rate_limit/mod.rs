pub mod entity;
pub mod repository;
pub mod window;

pub use entity::{RateLimitCounter, RateLimitDecision};
pub use repository::{CounterCommit, CounterStep, CounterTransition, RateLimitCounterStore};

//! In-memory transactional document stores.
//!
//! The publishing core treats persistence as an abstract collaborator behind
//! the domain repository traits. These implementations keep each collection
//! behind a `Mutex`, so every closure-shaped read-modify-write commits as one
//! serializable step, the same contract a database-backed store would honor
//! with real transactions.

mod memory_articles;
mod memory_drafts;
mod memory_rate_limits;
mod memory_subscribers;

pub use memory_articles::MemoryArticleRepository;
pub use memory_drafts::MemoryDraftRepository;
pub use memory_rate_limits::MemoryRateLimitStore;
pub use memory_subscribers::MemorySubscriberRepository;

// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Individual test crates
// use different subsets of these helpers, so dead_code warnings are silenced
// at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;

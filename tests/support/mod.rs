// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper, so unused-code warnings are silenced here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;

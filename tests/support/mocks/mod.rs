// tests/support/mocks/mod.rs
pub mod catalog;
pub mod time;

pub use catalog::InMemoryCatalog;
pub use time::{FixedClock, fixed_now};

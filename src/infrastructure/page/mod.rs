//! Host page infrastructure module

mod memory;

pub use memory::{CommandMode, ElementSpec, MemoryPage};

//! Storage Layer
//!
//! Key-value persistence abstraction and the JSON codec on top of it.

mod traits;
mod json;
mod memory;

pub use traits::KeyValueStore;
pub use json::{load_json, save_json};
pub use memory::MemoryStore;

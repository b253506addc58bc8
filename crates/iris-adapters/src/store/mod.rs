//! House store adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileHouseStore;
pub use memory::InMemoryHouseStore;

//! Board storage adapters and the JSON codec they share.

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileBoardStorage;
pub use memory::InMemoryBoardStorage;

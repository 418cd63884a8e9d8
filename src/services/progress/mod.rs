pub mod memory;
pub mod store;

pub use memory::InMemoryProgressStore;
pub use store::{NewProgress, ProgressRecord, ProgressStats, ProgressStore, StoreError};

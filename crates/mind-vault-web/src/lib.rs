pub mod exports;
pub mod runner;
pub mod storage;

pub use runner::GameRunner;
pub use storage::LocalStorageStore;

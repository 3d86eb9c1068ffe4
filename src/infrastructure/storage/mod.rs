//! Durable storage of completed batch results.

pub mod file_result_store;

pub use file_result_store::FileResultStore;

//! Test helpers for mocking dependencies in tests
//!
//! - `MockFileSystem`: In-memory filesystem that records probes and injects errors

mod mock_file_system;

pub use mock_file_system::MockFileSystem;

pub mod memory_fs;
pub mod os_fs;
pub mod process_env;
pub mod static_env;

#[cfg(test)]
pub mod test_helpers;

pub use memory_fs::MemoryFs;
pub use os_fs::OsFs;
pub use process_env::ProcessEnv;
pub use static_env::StaticEnv;

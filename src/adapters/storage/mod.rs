/// Storage adapters
pub mod fs;

pub use fs::FsVaultStorage;

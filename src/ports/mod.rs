/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod host;
pub mod storage;

#[cfg(test)]
pub mod mocks;

pub use host::{ClockPort, NotifierPort, WorkspacePort};
pub use storage::{NoteHandle, VaultStoragePort};

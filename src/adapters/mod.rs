/// Adapters - host-specific implementations
///
/// These modules implement the port traits for a local vault and a terminal host.
pub mod host;
pub mod storage;

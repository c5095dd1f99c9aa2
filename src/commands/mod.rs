/// Command modules invoked by the host surface
pub mod config;
pub mod note;

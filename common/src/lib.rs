pub mod config;
pub mod report;

mod macros;

// Re-exported so the exported macros can reach tracing through `$crate`.
pub use tracing;

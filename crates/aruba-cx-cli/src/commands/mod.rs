//! Command implementations.

pub mod interface;
pub mod system;

pub use interface::run_interface;
pub use system::run_system;

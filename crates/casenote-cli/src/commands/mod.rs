//! Command implementations.

pub mod batch;
pub mod process;

pub use self::batch::execute_batch;
pub use self::process::execute_process;

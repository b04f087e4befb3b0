//! CLI command implementations
//!
//! Each command lives in its own submodule and takes an options struct.

pub mod build;
pub mod init;
pub mod inspect;
pub mod kinds;

pub use build::{execute_build, BuildOptions};
pub use init::{execute_init, InitOptions};
pub use inspect::{execute_inspect, InspectOptions};
pub use kinds::execute_kinds;

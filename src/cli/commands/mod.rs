//! CLI command implementations

pub mod execute;
pub mod init;
pub mod status;
pub mod validate;

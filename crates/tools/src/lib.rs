//! Shared pieces of the developer binaries: seed entry, config files, and
//! the text dump.

pub mod config_file;
pub mod dump;
pub mod seed;

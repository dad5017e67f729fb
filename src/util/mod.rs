//! Ambient support for the crate: logging, configuration, test helpers.

pub mod logger;
pub mod options;
pub mod test_util;

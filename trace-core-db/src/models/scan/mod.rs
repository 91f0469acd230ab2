pub mod scan_log;

pub use scan_log::*;

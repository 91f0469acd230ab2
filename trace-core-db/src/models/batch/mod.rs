pub mod batch;
pub mod batch_filter;
pub mod batch_patch;
pub mod batch_status;

pub use batch::*;
pub use batch_filter::*;
pub use batch_patch::*;
pub use batch_status::*;

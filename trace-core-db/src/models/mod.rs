pub mod batch;
pub mod identifiable;
pub mod scan;

// Re-exports
pub use batch::*;
pub use identifiable::*;
pub use scan::*;

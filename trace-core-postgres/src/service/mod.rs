pub mod clone_engine;
pub mod scan_recorder;

#[cfg(test)]
pub(crate) mod test_fakes;

pub use clone_engine::{derive_clone_batch_id, CloneEngine, ClonedBatch};
pub use scan_recorder::ScanRecorder;

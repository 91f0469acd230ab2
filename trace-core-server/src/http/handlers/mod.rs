pub mod batches;
pub mod clone;
pub mod health;
pub mod scans;
pub mod trace;

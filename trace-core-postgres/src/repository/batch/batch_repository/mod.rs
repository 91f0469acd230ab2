pub mod repo_impl;
pub mod create;
pub mod find_by_batch_id;
pub mod list;
pub mod update_by_batch_id;
pub mod delete_by_batch_id;
pub mod increment_scan_count;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::BatchRepositoryImpl;

pub mod repo_impl;
pub mod create;
pub mod find_page_by_batch_id;
pub mod count_by_batch_id;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ScanLogRepositoryImpl;

pub mod count_by_batch_id;
pub mod create;
pub mod delete_by_batch_id;
pub mod find_by_batch_id;
pub mod find_page_by_batch_id;
pub mod increment_scan_count;
pub mod list;
pub mod pagination;
pub mod update_by_batch_id;

// Re-exports
pub use count_by_batch_id::*;
pub use create::*;
pub use delete_by_batch_id::*;
pub use find_by_batch_id::*;
pub use find_page_by_batch_id::*;
pub use increment_scan_count::*;
pub use list::*;
pub use pagination::*;
pub use update_by_batch_id::*;

pub mod batch;
pub mod db_init;
pub mod scan;

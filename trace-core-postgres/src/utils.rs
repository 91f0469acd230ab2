use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::str::FromStr;
use trace_core_api::{TraceError, TraceResult};

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> TraceResult<Self>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> TraceResult<HeaplessString<N>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| too_long(col_name, N))
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> TraceResult<Option<HeaplessString<N>>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| too_long(col_name, N))
}

fn too_long(col_name: &str, max: usize) -> TraceError {
    TraceError::Internal(format!(
        "Value for column '{col_name}' is too long (max {max} bytes)"
    ))
}

/// Error returned when a repository is used after its session has ended.
pub fn transaction_consumed() -> TraceError {
    TraceError::Internal("Transaction has been consumed".into())
}

use chrono::{DateTime, SubsecRound, Utc};
use heapless::String as HeaplessString;
use trace_core_api::{TraceError, TraceResult};

/// Worst-case UTF-8 width of one char. Bounded fields sized in chars keep
/// `max_chars * MAX_UTF8_CHAR_BYTES` bytes of storage.
pub const MAX_UTF8_CHAR_BYTES: usize = 4;

/// Converts a value into a bounded `HeaplessString`, rejecting empty input
/// and input longer than `max_chars` characters.
///
/// `N` is the byte capacity and must be at least
/// `max_chars * MAX_UTF8_CHAR_BYTES`.
pub fn required_heapless<const N: usize>(
    field: &str,
    value: &str,
    max_chars: usize,
) -> TraceResult<HeaplessString<N>> {
    if value.trim().is_empty() {
        return Err(TraceError::Validation(format!("{field} must not be empty")));
    }
    let too_long = || TraceError::Validation(format!("{field} is too long (max {max_chars} chars)"));
    if value.chars().count() > max_chars {
        return Err(too_long());
    }
    HeaplessString::try_from(value).map_err(|_| too_long())
}

/// Converts a value into a `HeaplessString`, cutting it at the last char
/// boundary that fits in `N` bytes.
pub fn truncated_heapless<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut end = value.len().min(N);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = HeaplessString::new();
    // Cannot fail: `end <= N` and lies on a char boundary.
    let _ = out.push_str(&value[..end]);
    out
}

/// `now` rounded down to the microsecond precision of a Postgres `TIMESTAMPTZ`,
/// so a returned record equals the one read back later.
pub fn stored_precision(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(6)
}

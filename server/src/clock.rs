//! Wall-clock timestamps in the RFC 3339 form the API exposes.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current UTC instant, e.g. `2025-06-01T12:34:56.789Z`.
#[must_use]
pub fn now_rfc3339() -> String {
    format_rfc3339(OffsetDateTime::now_utc())
}

pub(crate) fn format_rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

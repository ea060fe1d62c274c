use sqlx::{FromRow, sqlite::SqliteRow};
use tracing::warn;

use crate::config::DecodeErrorPolicy;
use crate::error::PantryError;

/// Decodes fetched rows one at a time so that a single bad row can be
/// skipped instead of failing the whole listing.
pub(crate) fn decode_rows<T>(
    table: &'static str,
    rows: Vec<SqliteRow>,
    policy: DecodeErrorPolicy,
) -> Result<Vec<T>, PantryError>
where
    T: for<'r> FromRow<'r, SqliteRow>,
{
    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match T::from_row(row) {
            Ok(item) => out.push(item),
            Err(e) => match policy {
                DecodeErrorPolicy::Skip => {
                    warn!(table, index, error = %e, "skipping undecodable row");
                }
                DecodeErrorPolicy::Abort => return Err(e.into()),
            },
        }
    }
    Ok(out)
}

//! Classification helpers for database errors.

/// Name of the unique constraint on `short_urls.url_key`.
pub const URL_KEY_CONSTRAINT: &str = "short_urls_url_key_key";

/// Width of the `short_urls.url_key` column.
pub const KEY_COLUMN_WIDTH: usize = 255;

/// Width of the `short_urls.target` column.
pub const TARGET_COLUMN_WIDTH: usize = 2048;

/// Returns true if the error is a unique violation on the mapping key.
///
/// Any other unique violation is left for the caller to treat as a storage
/// failure.
pub fn is_unique_violation_on_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(URL_KEY_CONSTRAINT))
}

//! Classification of SQLite errors raised by the `shortened_urls` table.

/// Returns true if `e` is a unique-constraint violation on `short_code`.
///
/// SQLite does not report constraint names, so the column is matched in the
/// error message (`UNIQUE constraint failed: shortened_urls.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("shortened_urls.short_code")
}

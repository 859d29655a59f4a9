use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Every statement a `MockDatabase` saw, with quotes unescaped so identifiers read as `"table"`.
///
/// Drop the repository first; the connection must be the last reference.
pub fn logged_sql(db: Arc<DatabaseConnection>) -> String {
    let log = Arc::try_unwrap(db)
        .expect("connection still shared")
        .into_transaction_log();
    format!("{:?}", log).replace("\\\"", "\"")
}

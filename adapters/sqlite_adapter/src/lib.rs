use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use stats_core::boundary::{validate_records, RawId, RawUserRecord};
use stats_core::domain::UserRecord;
use stats_core::ports::{Result, UserSource};
use stats_core::StatsError;

pub const DEFAULT_TABLE: &str = "users";

/// SQLite implementation of the UserSource trait
pub struct SqliteUserSource {
    db_path: String,
    table: String,
}

impl SqliteUserSource {
    /// Creates a new SqliteUserSource reading from the default `users` table
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Reads from another table. The name is interpolated into SQL, so only
    /// plain identifiers are accepted.
    pub fn with_table(mut self, table: &str) -> Result<Self> {
        if !is_identifier(table) {
            return Err(StatsError::Config(format!("invalid table name: {table:?}")));
        }
        self.table = table.to_string();
        Ok(self)
    }

    fn map_row(row: &Row) -> rusqlite::Result<RawUserRecord> {
        // NULL and non-UTF-8 blobs become an empty id, which validation rejects
        let id = match row.get::<_, Value>(0)? {
            Value::Integer(n) => RawId::Number(n),
            Value::Text(s) => RawId::Text(s),
            Value::Real(r) => RawId::Text(r.to_string()),
            Value::Blob(bytes) => RawId::Text(String::from_utf8(bytes).unwrap_or_default()),
            Value::Null => RawId::Text(String::new()),
        };

        // Only text timestamps are parsed; other storage types count as undated
        let created_at = match row.get::<_, Value>(3)? {
            Value::Text(s) => Some(s),
            _ => None,
        };

        Ok(RawUserRecord {
            id,
            user_role: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            user_credits: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
            created_at,
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl UserSource for SqliteUserSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let conn = Connection::open(&self.db_path).map_err(StatsError::backend)?;
        tracing::debug!(db = %self.db_path, table = %self.table, "Reading users");

        let sql = format!(
            "SELECT id, user_role, user_credits, created_at FROM {} ORDER BY rowid ASC",
            self.table
        );
        let mut stmt = conn.prepare(&sql).map_err(StatsError::backend)?;

        let raw = stmt
            .query_map([], Self::map_row)
            .map_err(StatsError::backend)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()
            .map_err(StatsError::backend)?;

        validate_records(raw)
    }
}

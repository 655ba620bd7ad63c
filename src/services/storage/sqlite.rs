use super::{KeyValueStore, StorageError};
use crate::services::database::Database;
use rusqlite::OptionalExtension;

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.connection().execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = CURRENT_TIMESTAMP",
            [key, value],
        )?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.connection()
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_get_missing_key() {
        let db = setup_test_db();
        assert_eq!(db.get("calendar-events").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_value() {
        let mut db = setup_test_db();
        db.set("calendar-events", "[]").unwrap();
        db.set("calendar-events", "[1]").unwrap();

        assert_eq!(db.get("calendar-events").unwrap().as_deref(), Some("[1]"));

        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM local_storage", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_remove_key() {
        let mut db = setup_test_db();
        db.set("calendar-events", "[]").unwrap();
        db.remove("calendar-events").unwrap();
        assert_eq!(db.get("calendar-events").unwrap(), None);
    }

    #[test]
    fn test_missing_schema_surfaces_database_error() {
        let db = Database::new(":memory:").unwrap();
        assert!(matches!(db.get("calendar-events"), Err(StorageError::Database(_))));
    }
}

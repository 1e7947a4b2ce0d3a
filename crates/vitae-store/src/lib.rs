//! Vitae Storage Layer
//!
//! Implements the RecordStore trait using SQLite.
//!
//! # Schema
//!
//! - `resumes`: one row per processed document (file name and identity)
//! - `work_experiences`: one row per work history entry, ordered by
//!   `position`, deleted together with its parent
//!
//! # Examples
//!
//! ```no_run
//! use vitae_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use vitae_domain::traits::{RecordStore, StoredRecord};
use vitae_domain::{ExtractedRecord, WorkExperience, SKILLS_SEPARATOR};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of RecordStore
///
/// Every saved record is written in its own transaction, so a failure while
/// saving one document never leaves a parent row without its children and
/// never undoes earlier documents.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vitae_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("resumes.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored resumes
    pub fn count_resumes(&self) -> Result<usize, StoreError> {
        self.count("SELECT COUNT(*) FROM resumes")
    }

    /// Number of stored work history entries across all resumes
    pub fn count_work_experiences(&self) -> Result<usize, StoreError> {
        self.count("SELECT COUNT(*) FROM work_experiences")
    }

    fn count(&self, sql: &str) -> Result<usize, StoreError> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        usize::try_from(n).map_err(|_| StoreError::InvalidData(format!("Negative count: {}", n)))
    }

    /// Load the work history of one resume in insertion order
    fn load_work_experiences(&self, resume_id: i64) -> Result<Vec<WorkExperience>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT company_name, customer_name, role, duration, skills_technologies, industry_domain, location
             FROM work_experiences WHERE resume_id = ?1 ORDER BY position",
        )?;

        let entries = stmt
            .query_map(params![resume_id], |row| {
                let skills: String = row.get(4)?;
                Ok(WorkExperience {
                    company_name: row.get(0)?,
                    customer_name: row.get(1)?,
                    role: row.get(2)?,
                    duration: row.get(3)?,
                    skills_technologies: split_skills(&skills),
                    industry_domain: row.get(5)?,
                    location: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}

/// Inverse of [`WorkExperience::joined_skills`]; skills that themselves contain `", "` come back split
fn split_skills(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(SKILLS_SEPARATOR).map(str::to_string).collect()
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn save_record(&mut self, record: &ExtractedRecord, file_name: &str) -> Result<i64, Self::Error> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO resumes (file_name, full_name, email, phone_number)
             VALUES (?1, ?2, ?3, ?4)",
            params![file_name, &record.full_name, &record.email, &record.phone_number],
        )?;
        let resume_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO work_experiences
                 (resume_id, position, company_name, customer_name, role, duration, skills_technologies, industry_domain, location)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (position, entry) in record.work_experience.iter().enumerate() {
                stmt.execute(params![
                    resume_id,
                    position as i64,
                    &entry.company_name,
                    &entry.customer_name,
                    &entry.role,
                    &entry.duration,
                    entry.joined_skills(),
                    &entry.industry_domain,
                    &entry.location,
                ])?;
            }
        }

        tx.commit()?;
        debug!(
            "Saved resume {} ({}) with {} work experience rows",
            resume_id,
            file_name,
            record.work_experience.len()
        );
        Ok(resume_id)
    }

    fn get_record(&self, id: i64) -> Result<Option<StoredRecord>, Self::Error> {
        let parent = self
            .conn
            .query_row(
                "SELECT file_name, full_name, email, phone_number FROM resumes WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((file_name, full_name, email, phone_number)) = parent else {
            return Ok(None);
        };

        Ok(Some(StoredRecord {
            id,
            file_name,
            record: ExtractedRecord {
                full_name,
                email,
                phone_number,
                work_experience: self.load_work_experiences(id)?,
            },
        }))
    }

    fn delete_record(&mut self, id: i64) -> Result<bool, Self::Error> {
        let deleted = self
            .conn
            .execute("DELETE FROM resumes WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills() {
        assert!(split_skills("").is_empty());
        assert_eq!(split_skills("Rust, SQL"), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let store = SqliteStore::new(":memory:").unwrap();
        let enabled: i64 = store
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_orphan_rows_are_rejected() {
        let store = SqliteStore::new(":memory:").unwrap();
        let result = store.conn.execute(
            "INSERT INTO work_experiences
             (resume_id, position, company_name, customer_name, role, duration, skills_technologies, industry_domain, location)
             VALUES (42, 0, 'a', 'b', 'c', 'd', '', 'e', 'f')",
            [],
        );
        assert!(result.is_err());
    }
}

//! Generic single-table repository
//!
//! `Table<K>` owns one rusqlite connection and speaks the SQL a record
//! kind declares on its `Record` impl. Ids come from SQLite's
//! AUTOINCREMENT rowid, so they grow monotonically and are never handed
//! out twice, deletes included.

use std::marker::PhantomData;
use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::error::{ShoeboxError, ShoeboxResult};
use crate::models::expense::canonical_date;
use crate::models::{Category, Expense, Record, RecordId};

/// Sort order for full-table reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Ascending id, the interchange order
    Id,
    /// The kind's human-facing order
    Display,
}

/// A single-table store for one record kind
pub struct Table<K: Record> {
    conn: Connection,
    _kind: PhantomData<K>,
}

impl<K: Record> Table<K> {
    /// Open or create the store at the given path
    pub fn open(path: &Path) -> ShoeboxResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| ShoeboxError::Database(format!("cannot open {}: {}", path.display(), e)))?;
        // WAL keeps readers working while a write is in flight
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::init(conn)
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> ShoeboxResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> ShoeboxResult<Self> {
        conn.execute(K::CREATE_TABLE_SQL, [])?;
        Ok(Self {
            conn,
            _kind: PhantomData,
        })
    }

    /// Persist a validated draft, returning the assigned id
    pub fn insert(&self, draft: &K::Draft) -> ShoeboxResult<RecordId> {
        self.conn
            .execute(K::INSERT_SQL, params_from_iter(K::insert_params(draft)))?;
        Ok(RecordId(self.conn.last_insert_rowid()))
    }

    /// Fetch one record by id
    pub fn get(&self, id: RecordId) -> ShoeboxResult<K> {
        let sql = format!("{} WHERE id = ?1", K::SELECT_SQL);
        self.conn
            .query_row(&sql, params![id.as_i64()], |row| K::from_row(row))
            .optional()?
            .ok_or_else(|| ShoeboxError::not_found(K::KIND, id.as_i64()))
    }

    /// Merge a patch over the stored record, re-validate, and write in place
    ///
    /// The id never changes. A patch that fails validation leaves the
    /// stored row untouched.
    pub fn update(&self, id: RecordId, patch: K::Patch) -> ShoeboxResult<()> {
        let current = self.get(id)?;
        let draft = K::merged_draft(&current, patch)?;
        let mut values = K::insert_params(&draft);
        values.push(Value::from(id.as_i64()));
        self.conn.execute(K::UPDATE_SQL, params_from_iter(values))?;
        Ok(())
    }

    /// Delete one record by id
    pub fn delete(&self, id: RecordId) -> ShoeboxResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", K::TABLE);
        let affected = self.conn.execute(&sql, params![id.as_i64()])?;
        if affected == 0 {
            return Err(ShoeboxError::not_found(K::KIND, id.as_i64()));
        }
        Ok(())
    }

    /// All rows in the requested order; empty table gives an empty vec
    pub fn list(&self, order: ListOrder) -> ShoeboxResult<Vec<K>> {
        let fragment = match order {
            ListOrder::Id => "id",
            ListOrder::Display => K::DISPLAY_ORDER,
        };
        let sql = format!("{} ORDER BY {}", K::SELECT_SQL, fragment);
        self.query(&sql, Vec::new())
    }

    /// Number of stored rows
    pub fn count(&self) -> ShoeboxResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", K::TABLE);
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Id of a stored record sharing the draft's natural key
    ///
    /// Kinds without a natural key never report a duplicate.
    pub fn find_duplicate(&self, draft: &K::Draft) -> ShoeboxResult<Option<RecordId>> {
        let Some(sql) = K::DUPLICATE_SQL else {
            return Ok(None);
        };
        let id: Option<i64> = self
            .conn
            .query_row(sql, params_from_iter(K::duplicate_params(draft)), |row| {
                row.get(0)
            })
            .optional()?;
        Ok(id.map(RecordId))
    }

    fn query(&self, sql: &str, values: Vec<Value>) -> ShoeboxResult<Vec<K>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(values), |row| K::from_row(row))?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl Table<Expense> {
    /// Expenses on one day, newest insert first
    ///
    /// The date is validated and canonicalized before the lookup, so
    /// unpadded input still matches stored rows.
    pub fn by_date(&self, date: &str) -> ShoeboxResult<Vec<Expense>> {
        let date = canonical_date(date)?;
        let sql = format!("{} WHERE date = ?1 ORDER BY id DESC", Expense::SELECT_SQL);
        self.query(&sql, vec![Value::from(date)])
    }

    /// Expenses of one category, in display order
    pub fn by_category(&self, category: Category) -> ShoeboxResult<Vec<Expense>> {
        let sql = format!(
            "{} WHERE category = ?1 ORDER BY {}",
            Expense::SELECT_SQL,
            Expense::DISPLAY_ORDER
        );
        self.query(&sql, vec![Value::from(category.to_string())])
    }
}

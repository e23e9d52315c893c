//! outlay-storage-json
//!
//! Filesystem-backed JSON persistence for the expense record store. The
//! whole record set lives in one file; every mutation is written through
//! a tmp file and renamed into place so the file is never half-written.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use uuid::Uuid;

use outlay_core::{CoreError, ExpenseStore, MemoryExpenseStore};
use outlay_domain::Expense;

const TMP_SUFFIX: &str = "tmp";

/// JSON-file record store. Reads serve from an in-memory snapshot loaded
/// at open; mutations go through the in-memory store and are flushed to
/// disk before they return.
pub struct JsonExpenseStore {
    path: PathBuf,
    inner: MemoryExpenseStore,
}

impl JsonExpenseStore {
    /// Opens the store at `path`, loading any existing record set. A
    /// missing file starts the store empty; the file is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let records = if path.exists() {
            let data = fs::read_to_string(&path).map_err(io_error)?;
            serde_json::from_str(&data).map_err(|err| CoreError::Storage(err.to_string()))?
        } else {
            Vec::new()
        };
        Ok(Self {
            path,
            inner: MemoryExpenseStore::with_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(&self.inner.snapshot())
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(io_error)
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn insert(&self, expense: Expense) -> Result<Expense, CoreError> {
        let inserted = self.inner.insert(expense)?;
        self.persist()?;
        Ok(inserted)
    }

    fn update(&self, id: Uuid, expense: Expense) -> Result<Expense, CoreError> {
        let updated = self.inner.update(id, expense)?;
        self.persist()?;
        Ok(updated)
    }

    fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.inner.delete(id)?;
        self.persist()
    }

    fn get(&self, id: Uuid) -> Result<Expense, CoreError> {
        self.inner.get(id)
    }

    fn scan_all(&self) -> Result<Vec<Expense>, CoreError> {
        self.inner.scan_all()
    }

    fn scan_by_category(&self, category: &str) -> Result<Vec<Expense>, CoreError> {
        self.inner.scan_by_category(category)
    }

    fn scan_by_date_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Expense>, CoreError> {
        self.inner.scan_by_date_range(from, to)
    }

    fn scan_recurring(&self) -> Result<Vec<Expense>, CoreError> {
        self.inner.scan_recurring()
    }
}

fn io_error(err: std::io::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(data.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)
}

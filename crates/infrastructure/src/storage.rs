//! Storage module - JSON array documents on the local filesystem
//!
//! A [`JsonArrayFile`] owns one file holding a JSON array. Appends are
//! serialised behind an async mutex and the file is replaced atomically
//! (temp file in the same directory, fsync, rename), so concurrent writers
//! never lose records and readers never observe a partial document.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, instrument};

use crate::{Error, Result};

/// A JSON array of `T` records persisted in a single file.
#[derive(Debug)]
pub struct JsonArrayFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonArrayFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a store for the document at `path`. The file is created on the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Location of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing or empty file is an empty list.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn read_all(&self) -> Result<Vec<T>> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;
        records
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(Error::from))
            .collect()
    }

    /// Append one record and return the new record count.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub async fn append(&self, record: &T) -> Result<usize> {
        let value = serde_json::to_value(record)?;

        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        records.push(value);
        self.replace(&records).await?;

        debug!(count = records.len(), "Appended record");
        Ok(records.len())
    }

    /// Records stay as raw JSON so fields this build does not know about
    /// survive a rewrite.
    async fn load(&self) -> Result<Vec<Value>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(other) => Err(Error::Corrupt {
                path: self.path.clone(),
                reason: format!("expected a JSON array, found {}", json_kind(&other)),
            }),
            Err(e) => Err(Error::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    async fn replace(&self, records: &[Value]) -> Result<()> {
        let tmp_path = self.temp_path()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        let bytes = serde_json::to_vec_pretty(records)?;

        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| Error::io(&tmp_path, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| Error::io(&tmp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| Error::io(&tmp_path, e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            Error::Configuration(format!(
                "{} does not name a file",
                self.path.display()
            ))
        })?;

        let mut tmp_name = OsString::from(".");
        tmp_name.push(file_name);
        tmp_name.push(".tmp");
        Ok(self.path.with_file_name(tmp_name))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

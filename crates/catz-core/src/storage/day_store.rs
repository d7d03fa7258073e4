use std::fs;
use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::codec::{load_record, save_record};
use crate::error::CoreError;
use crate::model::{FixedClock, Record, RecordType};

const EXTENSION: &str = "json";

/// One JSON document per day, stored as `<root>/<YYYY-MM-DD>.json`.
pub struct DayStore {
    root: PathBuf,
    record_type: Arc<RecordType>,
}

impl DayStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: &Path, record_type: Arc<RecordType>) -> Result<Self, CoreError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            record_type,
        })
    }

    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.{EXTENSION}", day.format("%Y-%m-%d")))
    }

    pub fn exists(&self, day: NaiveDate) -> bool {
        self.path_for(day).is_file()
    }

    /// The stored record for `day`, if there is one.
    pub fn get(&self, day: NaiveDate) -> Result<Option<Record>, CoreError> {
        let path = self.path_for(day);
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        fs2::FileExt::lock_shared(&file).map_err(CoreError::Io)?;
        let mut data = String::new();
        (&file).read_to_string(&mut data)?;
        fs2::FileExt::unlock(&file).map_err(CoreError::Io)?;

        let json: serde_json::Value = serde_json::from_str(&data)?;
        // Documents without a day take the one their file name says.
        let mut record = load_record(&self.record_type, &json, &FixedClock(day))?;
        // The file name is authoritative; saving must write back to this file.
        if record.day() != day {
            warn!(
                path = %path.display(),
                stored = %record.day(),
                "day in document disagrees with file name"
            );
            record.set_day(day);
        }
        debug!(path = %path.display(), "loaded day");
        Ok(Some(record))
    }

    /// The stored record for `day`, or a fresh one at its defaults.
    pub fn load(&self, day: NaiveDate) -> Result<Record, CoreError> {
        Ok(self
            .get(day)?
            .unwrap_or_else(|| Record::for_day(self.record_type.clone(), day)))
    }

    /// Write the record under its own day, replacing any earlier version.
    pub fn save(&self, record: &Record) -> Result<PathBuf, CoreError> {
        let path = self.path_for(record.day());
        let json = serde_json::to_string_pretty(&save_record(record)?)?;
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        fs2::FileExt::lock_exclusive(&file).map_err(CoreError::Io)?;
        (&file).write_all(json.as_bytes())?;
        (&file).write_all(b"\n")?;
        fs2::FileExt::unlock(&file).map_err(CoreError::Io)?;
        debug!(path = %path.display(), "saved day");
        Ok(path)
    }

    /// Days with a stored document, oldest first.
    pub fn days(&self) -> Result<Vec<NaiveDate>, CoreError> {
        let mut days = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(day) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                days.push(day);
            }
        }
        days.sort();
        Ok(days)
    }
}

use crate::core::store::{RecordStore, Slot};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::collections::HashSet;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub struct BackupLogic;

impl BackupLogic {
    /// Write the register as JSON to `dest` (gzip-compressed to `<dest>.gz`
    /// when `compress`). Returns the file actually written.
    pub fn backup<S: Slot>(store: &mut RecordStore<S>, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(store.records())?;

        let final_path = if compress {
            let gz_path = with_gz_extension(dest);
            let file = fs::File::create(&gz_path)?;
            let mut enc = GzEncoder::new(file, Compression::default());
            enc.write_all(json.as_bytes())?;
            enc.finish()?;
            gz_path
        } else {
            fs::write(dest, json.as_bytes())?;
            dest.to_path_buf()
        };

        store.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }

    /// Read a backup (plain or gzip JSON).
    pub fn read_backup(path: &Path) -> AppResult<Vec<AttendanceRecord>> {
        let raw = fs::read(path)?;

        let json = if raw.starts_with(&GZIP_MAGIC) {
            let mut out = String::new();
            GzDecoder::new(raw.as_slice()).read_to_string(&mut out)?;
            out
        } else {
            String::from_utf8(raw).map_err(|e| AppError::Other(format!("backup is not UTF-8: {e}")))?
        };

        let records: Vec<AttendanceRecord> = serde_json::from_str(&json)?;

        let mut seen = HashSet::new();
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(AppError::Other(format!(
                "backup contains duplicate record id {}",
                dup.id
            )));
        }

        Ok(records)
    }

    /// Replace the whole register with the content of a backup.
    pub fn restore<S: Slot>(store: &mut RecordStore<S>, path: &Path) -> AppResult<usize> {
        let records = Self::read_backup(path)?;
        let count = records.len();
        store.replace_all(records);
        Ok(count)
    }
}

fn with_gz_extension(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".gz");
    PathBuf::from(s)
}

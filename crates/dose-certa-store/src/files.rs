// SPDX-License-Identifier: Apache-2.0

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use dose_certa_model::Dataset;

use crate::error::{StoreError, StoreErrorCode};

/// Writes to `<path>.tmp`, syncs, then renames over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(&e))?;
    }
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    let mut file = File::create(tmp).map_err(|e| StoreError::io(&e))?;
    file.write_all(bytes).map_err(|e| StoreError::io(&e))?;
    file.sync_all().map_err(|e| StoreError::io(&e))?;
    fs::rename(tmp, path).map_err(|e| StoreError::io(&e))
}

pub fn read_dataset(path: &Path) -> Result<Dataset, StoreError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StoreError::new(
            StoreErrorCode::NotFound,
            format!("dataset {} does not exist", path.display()),
        ),
        _ => StoreError::new(
            StoreErrorCode::Io,
            format!("cannot read dataset {}: {e}", path.display()),
        ),
    })?;
    Ok(Dataset::from_json(&raw)?)
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    let mut bytes = serde_json::to_vec_pretty(dataset)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_content_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("data.json");
        write_atomic(&path, b"one").expect("first write");
        write_atomic(&path, b"two").expect("second write");
        assert_eq!(fs::read(&path).expect("read"), b"two");
        assert!(!dir.path().join("nested").join("data.json.tmp").exists());
    }

    #[test]
    fn dataset_round_trips_through_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        write_dataset(&path, &Dataset::default()).expect("write");
        assert_eq!(read_dataset(&path).expect("read"), Dataset::default());
        let missing = read_dataset(&dir.path().join("absent.json")).expect_err("missing");
        assert_eq!(missing.code, StoreErrorCode::NotFound);
    }

    #[test]
    fn unreadable_dataset_is_an_io_failure_not_a_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let not_utf8 = dir.path().join("binary.json");
        fs::write(&not_utf8, [0xff, 0xfe, 0xfd]).expect("write bytes");
        assert_eq!(
            read_dataset(&not_utf8).expect_err("invalid utf-8").code,
            StoreErrorCode::Io
        );
        assert_eq!(
            read_dataset(dir.path()).expect_err("directory").code,
            StoreErrorCode::Io
        );
    }
}

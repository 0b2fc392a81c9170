use super::*;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Stores every key as `<dir>/<key>.json`.
pub struct FileStorage {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            medium: "file".to_string(),
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(AppError::Validation(format!(
                "'{}' cannot be used as a storage key",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;

        if !fs::exists(&path)? {
            return Ok(None);
        }

        // Unreadable bytes are damaged data, not an unavailable medium.
        let bytes = fs::read(&path)?;
        let data = String::from_utf8(bytes).map_err(|e| {
            AppError::CorruptState(format!("{} is not valid UTF-8: {}", path.display(), e))
        })?;
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        create_file_parent(&path)?;

        // Write beside the target and rename over it, the old blob stays
        // intact if the write dies halfway.
        let tmp_path = path.with_extension("json.tmp");
        let written = write_then_rename(&tmp_path, &path, value);

        if written.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        written
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, value: &str) -> Result<(), AppError> {
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(tmp_path)?;

        file.write_all(value.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)?;

    Ok(())
}

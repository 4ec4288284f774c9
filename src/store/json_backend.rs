//! JSON snapshot persistence under the app data directory.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    ledger::Office,
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StorageBackend, StoreError};

const SNAPSHOT_EXTENSION: &str = "json";
const OFFICES_DIR: &str = "offices";
const TMP_SUFFIX: &str = "tmp";

#[derive(Clone)]
pub struct JsonStorage {
    offices_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let offices_dir = root.join(OFFICES_DIR);
        ensure_dir(&offices_dir)?;
        Ok(Self { offices_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn office_path(&self, name: &str) -> PathBuf {
        self.offices_dir
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, office: &Office, name: &str) -> Result<()> {
        let path = self.office_path(name);
        save_office_to_path(office, &path)
    }

    fn load(&self, name: &str) -> Result<Office> {
        let path = self.office_path(name);
        if !path.exists() {
            return Err(StoreError::Missing(name.to_string()));
        }
        load_office_from_path(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.offices_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.offices_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Serializes an office snapshot to `path`, writing through a temporary
/// file and renaming so readers never observe a partial snapshot.
pub fn save_office_to_path(office: &Office, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(office)?;
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), "office snapshot written");
    Ok(())
}

pub fn load_office_from_path(path: &Path) -> Result<Office> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn canonical_name(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || matches!(ch, '-' | '_') {
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_slugs_titles() {
        assert_eq!(canonical_name("Main Office"), "main-office");
        assert_eq!(canonical_name("  сип-панели 2025 "), "сип-панели-2025");
        assert_eq!(canonical_name("a/b\\c"), "abc");
    }
}

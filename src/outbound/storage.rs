//! Filesystem adapter scoped to the WebOS data directory.
//!
//! All per-user ROM paths resolve through a `cap_std::fs::Dir` opened at the
//! storage root, so a crafted username cannot escape it.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::RomStorage;

pub struct DataDirStorage {
    root: Dir,
}

impl DataDirStorage {
    /// Open the storage root. The directory itself must already exist; the
    /// per-user trees below it are created on demand.
    pub fn open(path: &Path) -> io::Result<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { root })
    }
}

impl RomStorage for DataDirStorage {
    fn ensure_dir(&self, path: &Path) -> io::Result<bool> {
        match self.root.metadata(path) {
            Ok(_) => Ok(false),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                // create_dir_all tolerates a concurrent create of the same
                // path, so losing the race here is not an error.
                self.root.create_dir_all(path)?;
                Ok(true)
            }
            Err(error) => Err(error),
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in self.root.read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn open_storage(tmp: &TempDir) -> DataDirStorage {
        DataDirStorage::open(tmp.path()).expect("open storage root")
    }

    #[test]
    fn ensure_dir_creates_nested_trees_once() {
        let tmp = TempDir::new().expect("tempdir");
        let storage = open_storage(&tmp);
        let dir = PathBuf::from("static/filesystem/home/ada/roms/gba");

        assert!(storage.ensure_dir(&dir).expect("first create"));
        assert!(tmp.path().join(&dir).is_dir());
        assert!(!storage.ensure_dir(&dir).expect("second call"));
    }

    #[test]
    fn list_dir_returns_entry_names() {
        let tmp = TempDir::new().expect("tempdir");
        let storage = open_storage(&tmp);
        let dir = PathBuf::from("static/filesystem/home/ada/roms/n64");
        storage.ensure_dir(&dir).expect("create");
        for name in ["title.z64", "readme.txt"] {
            std::fs::write(tmp.path().join(&dir).join(name), b"x").expect("write fixture");
        }

        let mut names = storage.list_dir(&dir).expect("list");
        names.sort();
        assert_eq!(names, vec!["readme.txt", "title.z64"]);
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let tmp = TempDir::new().expect("tempdir");
        let storage = open_storage(&tmp);
        let error = storage
            .list_dir(Path::new("static/filesystem/home/ghost/roms/gba"))
            .expect_err("missing directory");
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}

use super::{Error, Store, is_entry_file, is_hidden};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

impl Store {
    /// Checks the on-disk layout before anything is parsed.
    ///
    /// In order: the root must exist, `entries/` must exist and hold at
    /// least one `.md` file, and `metadata/` is created when absent (it is
    /// optional in the denormalized format). Each failure names the exact
    /// missing path, so a broken store surfaces before any file is opened.
    ///
    /// # Errors
    /// [`Error::MissingRoot`], [`Error::MissingEntriesDir`] or
    /// [`Error::NoEntryFiles`] for the structural checks; [`Error::Io`] if
    /// creating `metadata/` fails.
    #[tracing::instrument(skip(self), fields(root = %self.root().display()))]
    pub fn validate_layout(&self) -> Result<(), Error> {
        if !self.root().is_dir() {
            return Err(Error::MissingRoot(self.root().to_path_buf()));
        }

        let entries_dir = self.entries_dir();
        if !entries_dir.is_dir() {
            return Err(Error::MissingEntriesDir(entries_dir));
        }
        if !has_entry_files(&entries_dir) {
            return Err(Error::NoEntryFiles(entries_dir));
        }

        let metadata_dir = self.metadata_dir();
        if !metadata_dir.is_dir() {
            tracing::debug!(path = %metadata_dir.display(), "creating missing metadata directory");
            fs::create_dir_all(&metadata_dir)?;
        }

        Ok(())
    }
}

fn has_entry_files(entries_dir: &Path) -> bool {
    WalkDir::new(entries_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(Result::ok)
        .any(|entry| is_entry_file(&entry))
}

#[cfg(test)]
mod tests {
    use crate::store::{ENTRIES_DIR, Error, Store};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn valid_layout_passes() {
        let root = TempDir::new().unwrap();
        let entries = root.path().join(ENTRIES_DIR);
        fs::create_dir_all(&entries).unwrap();
        fs::write(entries.join("a.md"), "---\nid: \"e\"\n---\n\n").unwrap();

        Store::new(root.path()).validate_layout().unwrap();
    }

    #[test]
    fn missing_root_is_named() {
        let root = TempDir::new().unwrap();
        let gone = root.path().join("never-created");

        let error = Store::new(&gone).validate_layout().unwrap_err();

        assert!(matches!(error, Error::MissingRoot(_)));
        assert!(error.to_string().contains("never-created"));
    }

    #[test]
    fn missing_entries_dir_is_named() {
        let root = TempDir::new().unwrap();

        let error = Store::new(root.path()).validate_layout().unwrap_err();

        assert!(matches!(error, Error::MissingEntriesDir(_)));
        assert!(error.to_string().contains(ENTRIES_DIR));
    }

    #[test]
    fn empty_entries_dir_fails() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join(ENTRIES_DIR)).unwrap();

        let error = Store::new(root.path()).validate_layout().unwrap_err();

        assert!(matches!(error, Error::NoEntryFiles(_)));
    }

    #[test]
    fn non_entry_files_do_not_count() {
        let root = TempDir::new().unwrap();
        let entries = root.path().join(ENTRIES_DIR);
        fs::create_dir_all(&entries).unwrap();
        fs::write(entries.join("notes.txt"), "not an entry").unwrap();

        let error = Store::new(root.path()).validate_layout().unwrap_err();

        assert!(matches!(error, Error::NoEntryFiles(_)));
    }

    #[test]
    fn metadata_dir_is_created_on_the_fly() {
        let root = TempDir::new().unwrap();
        let entries = root.path().join(ENTRIES_DIR);
        fs::create_dir_all(&entries).unwrap();
        fs::write(entries.join("a.md"), "---\nid: \"e\"\n---\n\n").unwrap();

        let store = Store::new(root.path());
        assert!(!store.metadata_dir().exists());

        store.validate_layout().unwrap();

        assert!(store.metadata_dir().is_dir());
    }
}

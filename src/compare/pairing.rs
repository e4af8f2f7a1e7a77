//! Pairing of artifact files across the old and new directories

use std::collections::HashSet;
use std::path::Path;

use crate::error::BytecodeDiffError;
use crate::infra::FileSystem;

/// How the two directory listings line up, by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPairing {
    /// Present on both sides, in old-listing order
    pub comparable: Vec<String>,
    /// Only in the old directory
    pub only_old: Vec<String>,
    /// Only in the new directory
    pub only_new: Vec<String>,
}

impl DirectoryPairing {
    /// Pair two listings. No file content is read.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_diff::compare::DirectoryPairing;
    ///
    /// let old = vec!["A.json".to_string(), "B.json".to_string()];
    /// let new = vec!["B.json".to_string(), "C.json".to_string()];
    ///
    /// let pairing = DirectoryPairing::from_listings(&old, &new);
    /// assert_eq!(pairing.comparable, vec!["B.json"]);
    /// assert_eq!(pairing.only_old, vec!["A.json"]);
    /// assert_eq!(pairing.only_new, vec!["C.json"]);
    /// ```
    pub fn from_listings(old: &[String], new: &[String]) -> Self {
        let old_names: HashSet<&str> = old.iter().map(String::as_str).collect();
        let new_names: HashSet<&str> = new.iter().map(String::as_str).collect();

        let (comparable, only_old): (Vec<String>, Vec<String>) = old
            .iter()
            .cloned()
            .partition(|name| new_names.contains(name.as_str()));

        let only_new = new
            .iter()
            .filter(|name| !old_names.contains(name.as_str()))
            .cloned()
            .collect();

        Self {
            comparable,
            only_old,
            only_new,
        }
    }

    /// List both directories and pair them.
    ///
    /// Both paths are checked before either is listed.
    ///
    /// # Errors
    ///
    /// Returns [`BytecodeDiffError::NotADirectory`] naming the first side that is missing,
    /// not a directory, or cannot be listed.
    pub fn scan<FS: FileSystem>(
        fs: &FS,
        old_dir: &Path,
        new_dir: &Path,
    ) -> Result<Self, BytecodeDiffError> {
        ensure_dir(fs, old_dir, "old")?;
        ensure_dir(fs, new_dir, "new")?;

        let old = list(fs, old_dir, "old")?;
        let new = list(fs, new_dir, "new")?;

        let pairing = Self::from_listings(&old, &new);
        log::debug!(
            "paired {} and {}: {} comparable, {} only old, {} only new",
            old_dir.display(),
            new_dir.display(),
            pairing.comparable.len(),
            pairing.only_old.len(),
            pairing.only_new.len()
        );
        Ok(pairing)
    }

    /// True if any file is present on one side only
    pub fn has_orphans(&self) -> bool {
        !self.only_old.is_empty() || !self.only_new.is_empty()
    }
}

fn ensure_dir<FS: FileSystem>(fs: &FS, path: &Path, role: &str) -> Result<(), BytecodeDiffError> {
    if fs.is_dir(path) {
        Ok(())
    } else {
        Err(not_a_directory(path, role))
    }
}

fn list<FS: FileSystem>(fs: &FS, path: &Path, role: &str) -> Result<Vec<String>, BytecodeDiffError> {
    fs.list_files(path).map_err(|e| {
        log::debug!("listing {} failed: {}", path.display(), e);
        not_a_directory(path, role)
    })
}

fn not_a_directory(path: &Path, role: &str) -> BytecodeDiffError {
    BytecodeDiffError::NotADirectory {
        path: path.to_path_buf(),
        role: role.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryFileSystem;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_from_listings_keeps_old_listing_order() {
        let old = names(&["C.json", "A.json", "B.json"]);
        let new = names(&["A.json", "B.json", "C.json"]);

        let pairing = DirectoryPairing::from_listings(&old, &new);
        assert_eq!(pairing.comparable, names(&["C.json", "A.json", "B.json"]));
        assert!(!pairing.has_orphans());
    }

    #[test]
    fn test_from_listings_reports_orphans_on_both_sides() {
        let old = names(&["Bar.json", "Foo.json"]);
        let new = names(&["Foo.json", "Renamed.json"]);

        let pairing = DirectoryPairing::from_listings(&old, &new);
        assert_eq!(pairing.comparable, names(&["Foo.json"]));
        assert_eq!(pairing.only_old, names(&["Bar.json"]));
        assert_eq!(pairing.only_new, names(&["Renamed.json"]));
        assert!(pairing.has_orphans());
    }

    #[test]
    fn test_from_listings_with_empty_sides() {
        let pairing = DirectoryPairing::from_listings(&[], &names(&["A.json"]));
        assert!(pairing.comparable.is_empty());
        assert_eq!(pairing.only_new, names(&["A.json"]));

        let pairing = DirectoryPairing::from_listings(&[], &[]);
        assert_eq!(pairing, DirectoryPairing::default());
    }

    #[test]
    fn test_scan_missing_old_dir_fails_before_listing_new() {
        let fs = MemoryFileSystem::new().with_file("/new/A.json", "{}");

        let err = DirectoryPairing::scan(&fs, Path::new("/old"), Path::new("/new")).unwrap_err();
        match err {
            BytecodeDiffError::NotADirectory { path, role } => {
                assert_eq!(path, Path::new("/old"));
                assert_eq!(role, "old");
            }
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_missing_new_dir_names_new_side() {
        let fs = MemoryFileSystem::new().with_file("/old/A.json", "{}");

        let err = DirectoryPairing::scan(&fs, Path::new("/old"), Path::new("/new")).unwrap_err();
        assert!(matches!(
            err,
            BytecodeDiffError::NotADirectory { ref role, .. } if role == "new"
        ));
        assert!(err.to_string().contains("/new"));
    }

    #[test]
    fn test_scan_pairs_listed_files() {
        let fs = MemoryFileSystem::new()
            .with_file("/old/A.json", "{}")
            .with_file("/old/B.json", "{}")
            .with_file("/new/B.json", "{}");

        let pairing = DirectoryPairing::scan(&fs, Path::new("/old"), Path::new("/new")).unwrap();
        assert_eq!(pairing.comparable, names(&["B.json"]));
        assert_eq!(pairing.only_old, names(&["A.json"]));
        assert!(pairing.only_new.is_empty());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        /// Property: the three sets partition the union of both listings
        #[test]
        fn prop_pairing_partitions_union(
            old in proptest::collection::btree_set("[a-e]{1,2}\\.json", 0..12),
            new in proptest::collection::btree_set("[a-e]{1,2}\\.json", 0..12),
        ) {
            let old: Vec<String> = old.into_iter().collect();
            let new: Vec<String> = new.into_iter().collect();
            let pairing = DirectoryPairing::from_listings(&old, &new);

            let comparable: BTreeSet<&String> = pairing.comparable.iter().collect();
            let only_old: BTreeSet<&String> = pairing.only_old.iter().collect();
            let only_new: BTreeSet<&String> = pairing.only_new.iter().collect();

            prop_assert!(comparable.is_disjoint(&only_old));
            prop_assert!(comparable.is_disjoint(&only_new));
            prop_assert!(only_old.is_disjoint(&only_new));

            let union: BTreeSet<&String> = old.iter().chain(new.iter()).collect();
            let covered: BTreeSet<&String> = comparable
                .iter()
                .chain(only_old.iter())
                .chain(only_new.iter())
                .copied()
                .collect();
            prop_assert_eq!(union, covered);

            prop_assert_eq!(
                pairing.comparable.len() + pairing.only_old.len(),
                old.len()
            );
        }
    }
}

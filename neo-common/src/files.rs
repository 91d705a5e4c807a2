//! In-memory ROM file sets.

use hashbrown::HashMap;
use tracing::debug;

/// File names skipped at intake unless configured otherwise.
///
/// Many ROM archives ship an HTML readme next to the chip dumps.
pub const DEFAULT_EXCLUDES: &[&str] = &[".html"];

/// Named byte buffers extracted from one ROM archive.
///
/// Names are unique and case-sensitive. Iteration order is unspecified;
/// anything order-sensitive goes through [`RomFiles::sorted_names`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomFiles {
    files: HashMap<String, Vec<u8>>,
}

impl RomFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, returning the previous contents if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) -> Option<Vec<u8>> {
        self.files.insert(name.into(), data)
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_slice()))
    }

    /// Total bytes across every file.
    pub fn total_bytes(&self) -> u64 {
        self.files.values().map(|data| data.len() as u64).sum()
    }

    /// File names in chip order: ascending by lower-cased name, ties broken
    /// by the original name so the order never depends on hashing.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<(String, &str)> = self
            .files
            .keys()
            .map(|name| (name.to_lowercase(), name.as_str()))
            .collect();
        names.sort();
        names.into_iter().map(|(_, name)| name).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<u8>)> for RomFiles {
    fn from_iter<I: IntoIterator<Item = (S, Vec<u8>)>>(iter: I) -> Self {
        let mut files = RomFiles::new();
        for (name, data) in iter {
            files.insert(name, data);
        }
        files
    }
}

/// Name-based filter applied while files are loaded from an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeFilter {
    exclude: Vec<String>,
}

impl IntakeFilter {
    /// Skip any file whose name contains one of `patterns`.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that accepts every file.
    pub fn accept_all() -> Self {
        Self {
            exclude: Vec::new(),
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        match self
            .exclude
            .iter()
            .find(|pattern| file_name.contains(pattern.as_str()))
        {
            Some(pattern) => {
                debug!("Skipping {} (matches exclude pattern {:?})", file_name, pattern);
                false
            }
            None => true,
        }
    }
}

impl Default for IntakeFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

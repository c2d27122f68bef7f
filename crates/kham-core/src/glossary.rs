use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::GlossaryError;

/// Curated term record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub en: String,
    pub th: String,
    pub description: String,
}

impl GlossaryEntry {
    pub fn new(en: impl Into<String>, th: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            th: th.into(),
            description: description.into(),
        }
    }

    fn same_term(&self, en: &str) -> bool {
        self.en.to_lowercase() == en.to_lowercase()
    }
}

/// How a query is compared against the `en` field. Both are case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Query appears anywhere in the term, so "AI" hits "Artificial Intelligence (AI)"
    #[default]
    Substring,
    Exact,
}

impl MatchPolicy {
    fn matches(self, en: &str, query: &str) -> bool {
        let en = en.to_lowercase();
        match self {
            MatchPolicy::Substring => en.contains(query),
            MatchPolicy::Exact => en == query,
        }
    }
}

// On-disk shape: { "glossary": [ ... ] }
#[derive(Serialize, Deserialize)]
struct GlossaryFile {
    glossary: Vec<GlossaryEntry>,
}

/// Outcome of opening a store. A load failure is recoverable: the store
/// still serves the seed set and the error is handed back to the caller.
pub struct GlossaryLoad {
    pub store: GlossaryStore,
    pub error: Option<GlossaryError>,
}

/// Ordered, optionally file-backed collection of glossary entries
pub struct GlossaryStore {
    // Write guard doubles as the single-writer lock for check-then-append
    entries: RwLock<Vec<GlossaryEntry>>,
    path: Option<PathBuf>,
    policy: MatchPolicy,
    /// Backing file exists but could not be read; rewriting it would drop its entries
    unreadable: AtomicBool,
}

impl GlossaryStore {
    /// Store without a backing file
    pub fn in_memory(entries: Vec<GlossaryEntry>, policy: MatchPolicy) -> Self {
        Self {
            entries: RwLock::new(entries),
            path: None,
            policy,
            unreadable: AtomicBool::new(false),
        }
    }

    /// Open a file-backed store.
    ///
    /// A missing file is created from `seed`; an existing file supersedes it.
    /// An existing file that fails to load is left untouched and additions are
    /// refused until a successful [`GlossaryStore::reload`].
    pub fn open(path: impl Into<PathBuf>, seed: Vec<GlossaryEntry>, policy: MatchPolicy) -> GlossaryLoad {
        let path = path.into();
        let mut unreadable = false;

        let (entries, error) = if path.exists() {
            match read_file(&path) {
                Ok(entries) => {
                    tracing::info!("Loaded {} glossary entries from {}", entries.len(), path.display());
                    (entries, None)
                }
                Err(e) => {
                    tracing::error!("Failed to load glossary, serving seed data: {}", e);
                    unreadable = true;
                    (seed, Some(e))
                }
            }
        } else {
            tracing::info!("Glossary file {} missing, writing seed data", path.display());
            let error = write_file(&path, &seed).err();
            if let Some(e) = &error {
                tracing::error!("Failed to write seed glossary: {}", e);
            }
            (seed, error)
        };

        GlossaryLoad {
            store: Self {
                entries: RwLock::new(entries),
                path: Some(path),
                policy,
                unreadable: AtomicBool::new(unreadable),
            },
            error,
        }
    }

    /// First entry, in storage order, whose `en` matches `term` under the store's policy
    pub fn lookup(&self, term: &str) -> Option<GlossaryEntry> {
        let query = term.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .find(|e| self.policy.matches(&e.en, &query))
            .cloned()
    }

    /// Append an entry and rewrite the backing file.
    ///
    /// The in-memory set only changes once the file write succeeded.
    pub fn add(&self, entry: GlossaryEntry) -> Result<(), GlossaryError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(path) = self.path.as_ref().filter(|_| self.unreadable.load(Ordering::SeqCst)) {
            return Err(GlossaryError::Unreadable(path.clone()));
        }

        if entries.iter().any(|e| e.same_term(&entry.en)) {
            return Err(GlossaryError::Duplicate(entry.en));
        }

        let mut next = entries.clone();
        next.push(entry);

        if let Some(path) = &self.path {
            write_file(path, &next)?;
        }

        tracing::info!("Added glossary entry, {} total", next.len());
        *entries = next;
        Ok(())
    }

    /// Re-read the backing file. On failure the current set keeps serving.
    pub fn reload(&self) -> Result<usize, GlossaryError> {
        let Some(path) = &self.path else {
            return Ok(self.len());
        };

        let fresh = read_file(path)?;
        let count = fresh.len();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries = fresh;
        self.unreadable.store(false, Ordering::SeqCst);
        tracing::debug!("Reloaded {} glossary entries from {}", count, path.display());
        Ok(count)
    }

    /// Snapshot of all entries in storage order
    pub fn entries(&self) -> Vec<GlossaryEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_file(path: &Path) -> Result<Vec<GlossaryEntry>, GlossaryError> {
    let data = fs::read_to_string(path).map_err(|source| GlossaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: GlossaryFile = serde_json::from_str(&data).map_err(|source| GlossaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.glossary)
}

fn write_file(path: &Path, entries: &[GlossaryEntry]) -> Result<(), GlossaryError> {
    let io_err = |source| GlossaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    let file = GlossaryFile {
        glossary: entries.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file).map_err(|source| GlossaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    // Write a sibling file and rename it over the target, so a failed write
    // never leaves a truncated glossary behind
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

//! Prompt content for truth-or-dare rounds.
//!
//! Two immutable lists are loaded once at startup, one per [`PromptKind`].
//! Each backing file is a JSON array of records carrying a free-text prompt
//! field (`dare`, `question` or `text`); every other field is ignored.
//! Truths are read from `truth.json`, falling back to `truth+18.json`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File holding dare prompts inside the content directory
pub const DARE_FILE: &str = "dare.json";
/// File holding truth prompts inside the content directory
pub const TRUTH_FILE: &str = "truth.json";
/// Older name of the truth file, read when `truth.json` is absent
pub const LEGACY_TRUTH_FILE: &str = "truth+18.json";

/// Category a player picks on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Dare,
    Truth,
}

impl PromptKind {
    pub const ALL: [PromptKind; 2] = [PromptKind::Dare, PromptKind::Truth];

    /// Wire tag used in callback payloads and content files
    pub fn tag(&self) -> &'static str {
        match self {
            PromptKind::Dare => "dare",
            PromptKind::Truth => "truth",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dare" => Some(PromptKind::Dare),
            "truth" => Some(PromptKind::Truth),
            _ => None,
        }
    }

    /// Candidate file names in lookup order
    fn file_names(&self) -> &'static [&'static str] {
        match self {
            PromptKind::Dare => &[DARE_FILE],
            PromptKind::Truth => &[TRUTH_FILE, LEGACY_TRUTH_FILE],
        }
    }

    /// First candidate present in `dir`, or the preferred name when none is
    fn path_in(&self, dir: &Path) -> PathBuf {
        let names = self.file_names();
        names
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| dir.join(names[0]))
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Failure to read or decode one of the content files
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PromptRecord {
    #[serde(alias = "dare", alias = "question")]
    text: String,
}

/// In-memory store of loaded prompts
#[derive(Debug, Clone, Default)]
pub struct ContentBank {
    dares: Vec<String>,
    truths: Vec<String>,
}

impl ContentBank {
    /// Builds a bank from raw strings, trimming them and dropping blanks
    pub fn new<D, T>(dares: D, truths: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            dares: clean(dares.into_iter().map(Into::into)),
            truths: clean(truths.into_iter().map(Into::into)),
        }
    }

    /// Loads both kinds from `dir`, failing on the first unreadable file
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        let dares = read_kind(&PromptKind::Dare.path_in(dir))?;
        let truths = read_kind(&PromptKind::Truth.path_in(dir))?;
        let bank = Self::new(dares, truths);
        bank.log_sizes(dir);
        Ok(bank)
    }

    /// Loads both kinds from `dir`; a kind that fails to load stays empty
    pub fn load_lenient(dir: &Path) -> Self {
        let mut lists = PromptKind::ALL.map(|kind| {
            read_kind(&kind.path_in(dir)).unwrap_or_else(|e| {
                warn!("Content for '{}' unavailable, continuing with an empty bank: {}", kind, e);
                Vec::new()
            })
        });
        let bank = Self::new(
            std::mem::take(&mut lists[0]),
            std::mem::take(&mut lists[1]),
        );
        bank.log_sizes(dir);
        bank
    }

    pub fn len(&self, kind: PromptKind) -> usize {
        self.items(kind).len()
    }

    pub fn is_empty(&self, kind: PromptKind) -> bool {
        self.items(kind).is_empty()
    }

    /// Uniform pick with replacement; `None` when the kind has no prompts
    pub fn pick_random<R: Rng + ?Sized>(&self, kind: PromptKind, rng: &mut R) -> Option<&str> {
        self.items(kind).choose(rng).map(String::as_str)
    }

    pub fn pick(&self, kind: PromptKind) -> Option<&str> {
        self.pick_random(kind, &mut rand::thread_rng())
    }

    fn items(&self, kind: PromptKind) -> &[String] {
        match kind {
            PromptKind::Dare => &self.dares,
            PromptKind::Truth => &self.truths,
        }
    }

    fn log_sizes(&self, dir: &Path) {
        info!(
            "Content bank loaded from {}: {} dares, {} truths",
            dir.display(),
            self.dares.len(),
            self.truths.len()
        );
    }
}

fn read_kind(path: &Path) -> Result<Vec<String>, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<PromptRecord> =
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.into_iter().map(|r| r.text).collect())
}

fn clean(items: impl Iterator<Item = String>) -> Vec<String> {
    items
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

use fst::{Set, SetBuilder};
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word list compiled into the binary, used when no other source is configured.
const EMBEDDED_WORDLIST: &str = include_str!("../../data/wordlist.txt");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build dictionary: {0}")]
    Fst(#[from] fst::Error),

    #[error("dictionary {0} contains no words")]
    Empty(String),
}

/// Immutable set of lowercase words, iterated in sorted order.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// The dictionary compiled into the binary.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let dict = Self::from_wordlist(EMBEDDED_WORDLIST)?;
        debug!("Loaded embedded dictionary ({} words)", dict.len());
        Ok(dict)
    }

    /// Load a dictionary from disk.
    ///
    /// Files ending in `.dict` are read as a compiled FST set (see
    /// [`Dictionary::build_from_words`]); anything else is read as a
    /// newline-delimited word list.
    pub fn load_from_path(path: &Path) -> Result<Self, DictionaryError> {
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dict = if path.extension().and_then(|e| e.to_str()) == Some("dict") {
            let bytes = fs::read(path).map_err(io_err)?;
            Self::checked(Set::new(bytes)?, &path.display().to_string())?
        } else {
            let content = fs::read_to_string(path).map_err(io_err)?;
            Self::from_words_named(parse_wordlist(&content), &path.display().to_string())?
        };

        info!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Build a dictionary from newline-delimited text.
    pub fn from_wordlist(content: &str) -> Result<Self, DictionaryError> {
        Self::from_words_named(parse_wordlist(content), "word list")
    }

    /// Build a dictionary from individual words. Words are lowercased and
    /// deduplicated.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_named(words, "word set")
    }

    fn from_words_named<I, S>(words: I, name: &str) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted_words = normalize_words(words);

        let mut builder = SetBuilder::memory();
        for word in &sorted_words {
            builder.insert(word.as_bytes())?;
        }
        let set = Set::new(builder.into_inner()?)?;

        Self::checked(set, name)
    }

    fn checked(set: Set<Vec<u8>>, name: &str) -> Result<Self, DictionaryError> {
        if set.is_empty() {
            return Err(DictionaryError::Empty(name.to_string()));
        }
        Ok(Self { set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Stream all words in sorted order.
    pub fn stream(&self) -> fst::set::Stream<'_> {
        self.set.stream()
    }

    /// Compile a word list into an FST file loadable by [`Dictionary::load_from_path`].
    ///
    /// Returns the number of distinct words written.
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<usize, DictionaryError> {
        let sorted_words = normalize_words(words);

        if sorted_words.is_empty() {
            return Err(DictionaryError::Empty(output_path.display().to_string()));
        }

        let file = File::create(output_path).map_err(|source| DictionaryError::Io {
            path: output_path.to_path_buf(),
            source,
        })?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer)?;

        for word in &sorted_words {
            builder.insert(word.as_bytes())?;
        }

        builder.finish()?;

        Ok(sorted_words.len())
    }
}

/// Split a word list into entries: one per line, blank lines and `#`
/// comments skipped.
/// Trim and lowercase `words`, then sort and dedup them into FST insertion order.
fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    sorted.sort();
    sorted.dedup();
    sorted
}

pub fn parse_wordlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

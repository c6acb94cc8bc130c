use rust_stemmers::Stemmer;

use crate::language_utils::{ScanLanguage, filename_has_marker};

// @module: Search term normalization and per-language registry

/// Stemmed, lowercased search terms for one language
///
/// Built once at startup and never mutated afterwards; the scan only
/// reads it.
#[derive(Debug, Clone)]
pub struct TermSet {
    language: ScanLanguage,
    terms: Vec<String>,
}

impl TermSet {
    /// Normalize the raw word list for a language
    ///
    /// Each word is lowercased and reduced to its Snowball stem, keeping
    /// the configured order.
    pub fn build(language: ScanLanguage, raw_words: &[String]) -> Self {
        let stemmer = Stemmer::create(language.stemmer_algorithm());

        let terms = raw_words
            .iter()
            .map(|word| stemmer.stem(&word.to_lowercase()).into_owned())
            .collect();

        TermSet { language, terms }
    }

    /// Language these terms were stemmed for
    pub fn language(&self) -> ScanLanguage {
        self.language
    }

    /// The normalized terms, in configuration order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Filename marker to term set mapping
///
/// One entry per configured language; a file matching no marker belongs
/// to no set and is skipped by the driver.
#[derive(Debug, Clone)]
pub struct TermRegistry {
    sets: Vec<TermSet>,
}

impl TermRegistry {
    /// Build the registry by stemming the word list once per language
    pub fn build(languages: &[ScanLanguage], raw_words: &[String]) -> Self {
        let sets = languages
            .iter()
            .map(|language| TermSet::build(*language, raw_words))
            .collect();

        TermRegistry { sets }
    }

    /// Find the term set whose marker matches a filename
    pub fn for_filename(&self, filename: &str) -> Option<&TermSet> {
        self.sets
            .iter()
            .find(|set| filename_has_marker(filename, set.language()))
    }

    /// Number of registered language sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no language set is registered
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

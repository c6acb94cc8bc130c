use anyhow::{Result, anyhow};
use isolang::Language;
use rust_stemmers::Algorithm;

/// Language utilities for the subtitle scanner
///
/// This module maps ISO 639-1 language codes onto the languages the
/// scanner can stem, and handles the `-<code>.srt` filename marker
/// convention used to pick the term set for a file.
/// A language the scanner has a Snowball stemmer for.
///
/// Adding a language means adding an arm here and mapping it to the
/// matching `rust_stemmers::Algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanLanguage {
    German,
    English,
}

impl ScanLanguage {
    /// Resolve an ISO 639-1 code to a scan language
    ///
    /// The code must be a valid ISO 639-1 code AND one of the languages
    /// the scanner ships a stemmer for. Anything else is rejected, so an
    /// unsupported language tag fails before any file is processed.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();

        let language = Language::from_639_1(&normalized)
            .ok_or_else(|| anyhow!("Invalid ISO 639-1 language code: {}", code))?;

        match language {
            Language::Deu => Ok(Self::German),
            Language::Eng => Ok(Self::English),
            other => Err(anyhow!(
                "No stemmer available for language: {} ({})",
                other.to_name(),
                normalized
            )),
        }
    }

    /// ISO 639-1 code of the language
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::German => Language::Deu.to_name(),
            Self::English => Language::Eng.to_name(),
        }
    }

    /// Snowball algorithm used to stem terms in this language
    pub fn stemmer_algorithm(&self) -> Algorithm {
        match self {
            Self::German => Algorithm::German,
            Self::English => Algorithm::English,
        }
    }

    /// Filename suffix that selects this language, e.g. `-de.srt`
    pub fn filename_marker(&self) -> String {
        format!("-{}.srt", self.code())
    }
}

impl std::fmt::Display for ScanLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Check whether a filename carries the marker for a language
///
/// The marker must sit immediately before the extension, so `100-de.srt`
/// matches German while `100-dex.srt` and `100.srt` match nothing.
pub fn filename_has_marker(filename: &str, language: ScanLanguage) -> bool {
    filename.ends_with(&language.filename_marker())
}

/*!
 * Tests for scan language resolution and filename markers
 */

use rust_stemmers::Algorithm;
use subgrep::language_utils::{ScanLanguage, filename_has_marker};

/// Test resolution of supported language codes
#[test]
fn test_from_code_withSupportedCodes_shouldResolve() {
    assert_eq!(ScanLanguage::from_code("de").unwrap(), ScanLanguage::German);
    assert_eq!(ScanLanguage::from_code("en").unwrap(), ScanLanguage::English);

    // Whitespace and case tests
    assert_eq!(ScanLanguage::from_code(" DE ").unwrap(), ScanLanguage::German);
    assert_eq!(ScanLanguage::from_code("En").unwrap(), ScanLanguage::English);
}

/// Test rejection of invalid and unsupported codes
#[test]
fn test_from_code_withBadCodes_shouldFail() {
    // not ISO 639-1 at all
    assert!(ScanLanguage::from_code("zz").is_err());
    assert!(ScanLanguage::from_code("eng").is_err());
    assert!(ScanLanguage::from_code("").is_err());

    // valid ISO codes without a stemmer
    assert!(ScanLanguage::from_code("ja").is_err());
    assert!(ScanLanguage::from_code("ko").is_err());
}

/// Test language accessors
#[test]
fn test_language_accessors_shouldMatchLanguage() {
    assert_eq!(ScanLanguage::German.code(), "de");
    assert_eq!(ScanLanguage::English.code(), "en");

    assert_eq!(ScanLanguage::German.name(), "German");
    assert_eq!(ScanLanguage::English.name(), "English");

    assert!(matches!(ScanLanguage::German.stemmer_algorithm(), Algorithm::German));
    assert!(matches!(ScanLanguage::English.stemmer_algorithm(), Algorithm::English));

    assert_eq!(ScanLanguage::German.filename_marker(), "-de.srt");
    assert_eq!(ScanLanguage::English.filename_marker(), "-en.srt");
}

/// Test marker detection on filenames
#[test]
fn test_filename_has_marker_shouldRequireSuffixPosition() {
    assert!(filename_has_marker("12345-de.srt", ScanLanguage::German));
    assert!(filename_has_marker("12345-en.srt", ScanLanguage::English));

    // marker of the other language
    assert!(!filename_has_marker("12345-de.srt", ScanLanguage::English));

    // marker must sit immediately before the extension
    assert!(!filename_has_marker("12345-dex.srt", ScanLanguage::German));
    assert!(!filename_has_marker("12345-de.srt.bak", ScanLanguage::German));
    assert!(!filename_has_marker("12345.srt", ScanLanguage::German));
}

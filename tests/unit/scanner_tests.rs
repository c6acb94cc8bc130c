/*!
 * Tests for the scanner core: window scoring and track traversal
 */

use subgrep::scanner::{TrackTraverser, WindowMatch, WindowScorer};
use subgrep::subtitle_processor::SubtitleEntry;

/// Build a track of entries with 1s display time and 1s gaps
fn entries_from_texts(texts: &[&str]) -> Vec<SubtitleEntry> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let start = (2 * i as u64 + 1) * 1000;
            SubtitleEntry::new(i + 1, start, start + 1000, text.to_string())
        })
        .collect()
}

/// Collect every match the traverser emits
fn collect_matches(entries: &[SubtitleEntry], terms: &[String], threshold: u8) -> Vec<WindowMatch> {
    let traverser = TrackTraverser::new(WindowScorer::new(threshold));
    let mut matches = Vec::new();
    traverser
        .traverse(entries, terms, |window| {
            matches.push(window);
            Ok(())
        })
        .unwrap();
    matches
}

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_windowScorer_exactTerm_shouldScoreHundred() {
    let scorer = WindowScorer::new(90);
    assert_eq!(scorer.score("hello world", &terms(&["hello"])), 100);

    // an exact term beats any threshold below 100
    let scorer = WindowScorer::new(99);
    assert_eq!(scorer.score("hello", &terms(&["hello"])), 100);
}

#[test]
fn test_windowScorer_disjointTokens_shouldReturnSentinel() {
    let scorer = WindowScorer::new(90);
    assert_eq!(scorer.score("mmm qqq vvv", &terms(&["hello"])), 0);
}

#[test]
fn test_windowScorer_scoreEqualToThreshold_shouldBeMiss() {
    // ratio("abcde", "abcdx") == 80: the gate is strictly greater-than
    let scorer = WindowScorer::new(80);
    assert_eq!(scorer.score("abcdx", &terms(&["abcde"])), 0);

    let scorer = WindowScorer::new(79);
    assert_eq!(scorer.score("abcdx", &terms(&["abcde"])), 80);
}

#[test]
fn test_windowScorer_caseInsensitiveTokens_shouldMatch() {
    let scorer = WindowScorer::new(90);
    assert_eq!(scorer.score("HELLO there", &terms(&["hello"])), 100);
}

#[test]
fn test_windowScorer_emptyTermList_shouldReturnSentinel() {
    let scorer = WindowScorer::new(90);
    assert_eq!(scorer.score("hello world", &[]), 0);
}

#[test]
fn test_traverser_noMatches_shouldEmitNothing() {
    let entries = entries_from_texts(&["mmm", "qqq", "vvv"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 90);
    assert!(matches.is_empty());
}

#[test]
fn test_traverser_matchOnFirstPair_shouldSkipSecondEntry() {
    // "A B" matches, so no window may start at B; the next window is C alone
    let entries = entries_from_texts(&["hello one", "hello two", "hello three"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 90);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].context, "hello one hello two");
    assert_eq!(matches[1].context, "hello three");
}

#[test]
fn test_traverser_matchSpan_shouldCoverBothEntries() {
    let entries = entries_from_texts(&["hello one", "two"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 90);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start_time_ms, entries[0].start_time_ms);
    assert_eq!(matches[0].end_time_ms, entries[1].end_time_ms);
    assert_eq!(matches[0].trust, 100);
}

#[test]
fn test_traverser_missThenMatch_shouldSlideByOne() {
    // window at 0 misses, window at 1 spans entries 1..=2
    let entries = entries_from_texts(&["mmm", "qqq", "hello"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 90);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].context, "qqq hello");
    assert_eq!(matches[0].start_time_ms, entries[1].start_time_ms);
    assert_eq!(matches[0].end_time_ms, entries[2].end_time_ms);
}

#[test]
fn test_traverser_singleEntryTrack_shouldUseSingleEntryWindow() {
    let entries = entries_from_texts(&["hello"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 90);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].context, "hello");
    assert_eq!(matches[0].start_time_ms, entries[0].start_time_ms);
    assert_eq!(matches[0].end_time_ms, entries[0].end_time_ms);
}

#[test]
fn test_traverser_emptyTrack_shouldEmitNothing() {
    let matches = collect_matches(&[], &terms(&["hello"]), 90);
    assert!(matches.is_empty());
}

#[test]
fn test_traverser_fuzzyToken_shouldCarryTrustScore() {
    // "helo" vs "hello": one edit in five characters
    let entries = entries_from_texts(&["helo there"]);
    let matches = collect_matches(&entries, &terms(&["hello"]), 75);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].trust, 80);
}

#[test]
fn test_traverser_sinkError_shouldAbortTraversal() {
    let entries = entries_from_texts(&["hello", "hello", "hello"]);
    let traverser = TrackTraverser::new(WindowScorer::new(90));

    let mut calls = 0;
    let result = traverser.traverse(&entries, &terms(&["hello"]), |_| {
        calls += 1;
        Err(anyhow::anyhow!("sink failed"))
    });

    assert!(result.is_err());
    assert_eq!(calls, 1);
}

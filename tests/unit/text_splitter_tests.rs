/*!
 * Tests for the recursive text splitter
 *
 * The splitter is the most intricate part of the pipeline, so it gets the
 * heaviest coverage: boundary preference, size bounds, round-trip laws,
 * overlap semantics and the character-level fallback.
 */

use rand::{Rng, SeedableRng, rngs::StdRng};

use doctwai::text_splitter::{DEFAULT_SEPARATORS, RecursiveTextSplitter};

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split with no overlap and assert the two base laws: every chunk is within
/// the size bound and concatenation reproduces the input exactly.
fn assert_round_trip(text: &str, chunk_size: usize) -> Vec<String> {
    let splitter = RecursiveTextSplitter::new(chunk_size, 0);
    let chunks = splitter.split_text(text);

    for chunk in &chunks {
        assert!(
            char_len(chunk) <= chunk_size,
            "chunk {:?} exceeds size {}",
            chunk,
            chunk_size
        );
    }
    assert_eq!(chunks.concat(), text, "chunks must reproduce the input");
    chunks
}

#[test]
fn test_defaultSeparators_shouldEndWithCharacterFallback() {
    assert_eq!(DEFAULT_SEPARATORS.first(), Some(&"\n\n"));
    assert_eq!(DEFAULT_SEPARATORS.last(), Some(&""));
}

#[test]
fn test_splitText_withShortText_shouldReturnSingleChunk() {
    let splitter = RecursiveTextSplitter::new(100, 0);
    assert_eq!(splitter.split_text("Hello."), vec!["Hello."]);
}

#[test]
fn test_splitText_withEmptyText_shouldReturnNoChunks() {
    let splitter = RecursiveTextSplitter::new(10, 0);
    assert!(splitter.split_text("").is_empty());
}

#[test]
fn test_splitText_withSentences_shouldBreakAtSentenceBoundary() {
    let splitter = RecursiveTextSplitter::new(15, 0);
    let chunks = splitter.split_text("Hello world. This is a test.");

    assert_eq!(chunks, vec!["Hello world. ", "This is a test."]);
}

#[test]
fn test_splitText_withParagraphs_shouldPreferBlankLineBoundary() {
    let splitter = RecursiveTextSplitter::new(20, 0);
    let chunks = splitter.split_text("First paragraph.\n\nSecond paragraph.");

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].ends_with("\n\n"));
    assert_eq!(chunks[1], "Second paragraph.");
}

#[test]
fn test_splitText_withLines_shouldBreakAtNewlines() {
    let chunks = assert_round_trip("line one\nline two\nline three", 10);
    assert_eq!(chunks, vec!["line one\n", "line two\n", "line three"]);
}

#[test]
fn test_splitText_withPackableLines_shouldGroupWithinBudget() {
    // Two short lines fit one chunk; the third starts a new one.
    let chunks = assert_round_trip("ab\ncd\nefgh\n", 6);
    assert_eq!(chunks, vec!["ab\ncd\n", "efgh\n"]);
}

#[test]
fn test_splitText_withWhitespaceOnlyText_shouldKeepWhitespace() {
    let chunks = assert_round_trip("   \n  ", 3);
    assert!(!chunks.is_empty());
    assert!(chunks.iter().all(|c| !c.is_empty()));
}

#[test]
fn test_splitText_withChunkSizeOne_shouldYieldOneChunkPerCharacter() {
    let chunks = assert_round_trip("ab\ncd", 1);
    assert_eq!(chunks, vec!["a", "b", "\n", "c", "d"]);
}

#[test]
fn test_splitText_withUnbrokenWord_shouldFallBackToCharacterSplit() {
    let text = "a".repeat(25);
    let chunks = assert_round_trip(&text, 10);
    assert_eq!(chunks, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
}

#[test]
fn test_splitText_withoutCharacterFallback_shouldKeepIndivisibleUnitWhole() {
    // With a custom chain that has no finer separator, an unsplittable span
    // is kept whole rather than dropped.
    let splitter = RecursiveTextSplitter::new(5, 0).with_separators(["\n\n", "\n"]);
    let chunks = splitter.split_text("abcdefgh");

    assert_eq!(chunks, vec!["abcdefgh"]);
}

#[test]
fn test_splitText_withMultibyteText_shouldCountCharactersNotBytes() {
    let chunks = assert_round_trip("héllo wörld. ünïcode tëst.", 15);
    assert_eq!(chunks.len(), 2);
}

#[test]
fn test_splitText_withCjkText_shouldSplitOnCharacterBoundaries() {
    let chunks = assert_round_trip("日本語のテキスト", 3);
    assert_eq!(chunks, vec!["日本語", "のテキ", "スト"]);
}

#[test]
fn test_splitText_calledTwice_shouldBeDeterministic() {
    let splitter = RecursiveTextSplitter::new(12, 4);
    let text = "Some text. More text. Even more text here.";
    assert_eq!(splitter.split_text(text), splitter.split_text(text));
}

#[test]
fn test_splitText_withOverlap_shouldRepeatTailOfPreviousChunk() {
    let splitter = RecursiveTextSplitter::new(6, 2);
    let chunks = splitter.split_text("a, b, c, d");

    assert_eq!(chunks, vec!["a, b, ", ", c, d"]);
    // The second chunk starts with the last two characters of the first
    // chunk's un-overlapped text.
    assert!(chunks[1].starts_with(", "));
}

#[test]
fn test_splitText_withOverlap_shouldNotChangeFirstChunk() {
    let no_overlap = RecursiveTextSplitter::new(6, 0);
    let with_overlap = RecursiveTextSplitter::new(6, 2);
    let text = "a, b, c, d";

    assert_eq!(
        no_overlap.split_text(text)[0],
        with_overlap.split_text(text)[0]
    );
}

#[test]
fn test_splitText_withOverlap_shouldReproduceInputMinusPrefixes() {
    let splitter = RecursiveTextSplitter::new(6, 2);
    let text = "a, b, c, d";
    let chunks = splitter.split_text(text);

    let mut rebuilt = chunks[0].clone();
    for chunk in &chunks[1..] {
        // Overlap here is always the full two characters; strip it.
        rebuilt.push_str(&chunk[2..]);
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_splitText_withOverlap_shouldCapCombinedLengthAtChunkSize() {
    // The second base chunk already fills the budget, so no overlap prefix
    // fits and the chunk is left as-is.
    let splitter = RecursiveTextSplitter::new(5, 2);
    let chunks = splitter.split_text("aaaa bbbbb");

    assert_eq!(chunks, vec!["aaaa ", "bbbbb"]);
    for chunk in &chunks {
        assert!(char_len(chunk) <= 5);
    }
}

#[test]
fn test_splitText_withRandomTexts_shouldAlwaysRoundTrip() {
    let alphabet: Vec<char> = vec!['a', 'b', 'c', ' ', ' ', '\n', '.', ',', '!', 'é', '日'];
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let len = rng.random_range(0..200);
        let text: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        let chunk_size = rng.random_range(1..=20);

        assert_round_trip(&text, chunk_size);
    }
}

#[test]
fn test_splitText_withRandomTextsAndOverlap_shouldStayWithinSizeBound() {
    let alphabet: Vec<char> = vec!['x', 'y', ' ', '.', ',', '\n'];
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let len = rng.random_range(1..150);
        let text: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        let chunk_size = rng.random_range(2..=15);
        let overlap = rng.random_range(0..chunk_size);

        let splitter = RecursiveTextSplitter::new(chunk_size, overlap);
        for chunk in splitter.split_text(&text) {
            assert!(char_len(&chunk) <= chunk_size);
        }
    }
}

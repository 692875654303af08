/*!
 * Recursive, separator-aware text splitting.
 *
 * This module implements the chunking half of the translation pipeline:
 * a document is divided into chunks no larger than a configured size,
 * preferring to break at coarse boundaries (paragraphs) before fine ones
 * (characters), with optional overlap between adjacent chunks.
 */

/// Separator priority chain tried from coarsest to finest granularity.
///
/// The empty string is the fallback of last resort: it splits between
/// arbitrary characters, which guarantees termination for any chunk size.
pub const DEFAULT_SEPARATORS: [&str; 9] = ["\n\n", "\n", ". ", "! ", "? ", "; ", ", ", " ", ""];

/// Recursive character text splitter.
///
/// Sizes are measured in characters (Unicode scalar values), not bytes.
/// A separator is retained at the end of the piece it terminates, so with
/// zero overlap the concatenation of all chunks reproduces the input exactly.
///
/// When overlap is configured, each chunk after the first is prefixed with
/// the trailing `chunk_overlap` characters of the previous chunk's
/// un-overlapped text. The prefix is shortened when needed so that a combined
/// chunk never exceeds `chunk_size` characters.
#[derive(Debug, Clone)]
pub struct RecursiveTextSplitter {
    /// Maximum characters per chunk
    chunk_size: usize,
    /// Characters repeated from the previous chunk at the start of the next
    chunk_overlap: usize,
    /// Separator priority chain, coarsest first
    separators: Vec<String>,
}

impl RecursiveTextSplitter {
    /// Create a splitter with the default separator chain.
    ///
    /// Callers validate sizes up front (see `Config::validate`); the
    /// splitter itself never fails for `chunk_size > 0`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        debug_assert!(chunk_size > 0);
        debug_assert!(chunk_overlap < chunk_size);
        Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the separator priority chain.
    #[allow(dead_code)]
    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Split a document into chunks, in document order.
    ///
    /// Empty input produces no chunks. Whitespace is never trimmed here;
    /// the splitter only decides where to cut.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let separators: Vec<&str> = self.separators.iter().map(String::as_str).collect();
        let chunks = self.split_span(text, &separators);

        if self.chunk_overlap == 0 {
            return chunks;
        }
        self.apply_overlap(chunks)
    }

    /// Split one span with the remaining separator chain.
    fn split_span(&self, span: &str, separators: &[&str]) -> Vec<String> {
        if char_len(span) <= self.chunk_size {
            return vec![span.to_string()];
        }

        let Some((separator, finer)) = separators.split_first() else {
            // Out of separators: keep the indivisible unit whole rather than
            // lose content.
            return vec![span.to_string()];
        };

        if separator.is_empty() {
            return split_chars(span, self.chunk_size);
        }

        self.pack_pieces(span.split_inclusive(separator), finer)
    }

    /// Greedily pack consecutive pieces into chunks within the size budget.
    ///
    /// A piece that alone exceeds the budget is re-split with the finer
    /// separators before packing continues.
    fn pack_pieces<'a, I>(&self, pieces: I, finer: &[&str]) -> Vec<String>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for piece in pieces {
            let piece_len = char_len(piece);

            if piece_len > self.chunk_size {
                if current_len > 0 {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                chunks.extend(self.split_span(piece, finer));
            } else if current_len + piece_len > self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                current.push_str(piece);
                current_len = piece_len;
            } else {
                current.push_str(piece);
                current_len += piece_len;
            }
        }

        if current_len > 0 {
            chunks.push(current);
        }
        chunks
    }

    /// Prefix every chunk after the first with the tail of its predecessor.
    ///
    /// The prefix is taken from the predecessor as it stood before overlap
    /// was applied, and is shortened so the combined chunk stays within
    /// `chunk_size` characters.
    fn apply_overlap(&self, chunks: Vec<String>) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(chunks.len());
        let mut previous: Option<String> = None;

        for chunk in chunks {
            let combined = match previous.as_deref() {
                None => chunk.clone(),
                Some(prev) => {
                    let budget = self.chunk_size.saturating_sub(char_len(&chunk));
                    let take = self.chunk_overlap.min(budget);
                    let mut combined = String::from(tail_chars(prev, take));
                    combined.push_str(&chunk);
                    combined
                }
            };
            result.push(combined);
            previous = Some(chunk);
        }
        result
    }
}

/// Length in characters, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The trailing `count` characters of `s` (all of `s` when it is shorter).
fn tail_chars(s: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    match s.char_indices().rev().nth(count - 1) {
        Some((index, _)) => &s[index..],
        None => s,
    }
}

/// Fixed-width character split, the last resort of the separator chain.
fn split_chars(span: &str, size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for ch in span.chars() {
        current.push(ch);
        current_len += 1;
        if current_len == size {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

use std::sync::LazyLock;

use regex::Regex;

static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"第\d+問").unwrap());

/// Split raw bank text into one body span per `第N問` delimiter, in document
/// order. The delimiter tokens themselves and anything before the first one
/// are discarded. Consecutive delimiters yield an empty body; a text with no
/// delimiters yields no blocks.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let matches: Vec<_> = DELIMITER_RE.find_iter(text).collect();
    let mut blocks = Vec::with_capacity(matches.len());

    for (i, m) in matches.iter().enumerate() {
        let start = m.end();
        let end = matches
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        blocks.push(&text[start..end]);
    }

    blocks
}

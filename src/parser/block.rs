//! Per-block line classifier.
//!
//! A single forward pass over the block's lines with a current mode:
//!   question → choices → answer → explanation
//! Lines that declare a marker switch the mode; everything else accumulates
//! into whichever free-text field the current mode points at. The parse
//! never fails: missing markers leave the matching fields at their defaults.

use crate::record::CHOICE_LABELS;

const ANSWER_MARKERS: &[&str] = &["正解：", "正解:"];
const EXPLANATION_MARKERS: &[&str] = &["解説：", "解説:"];

// Separator between a choice label and its text. A bare space also counts,
// as in "C 硫黄".
const LABEL_SEPARATORS: &[char] = &['.', '．', ' '];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Question,
    Choices,
    Answer,
    Explanation,
}

/// Raw fields recovered from one block. The caller stamps position-derived
/// identity on top of this.
#[derive(Debug)]
pub struct ParsedBlock {
    pub stem: String,
    pub choices: Vec<String>,
    pub answer_label: char,
    pub explanation: String,
}

pub fn parse_block(body: &str) -> ParsedBlock {
    let mut mode = Mode::Question;
    let mut stem_lines: Vec<&str> = Vec::new();
    let mut choices: Vec<String> = Vec::new();
    let mut answer_label = 'A';
    let mut explanation_parts: Vec<String> = Vec::new();

    for raw in body.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((label, text)) = split_choice(line) {
            if label == 'A' {
                mode = Mode::Choices;
            }
            choices.push(format!("{}. {}", label, text));
            continue;
        }

        if ANSWER_MARKERS.iter().any(|m| line.starts_with(m)) {
            mode = Mode::Answer;
            answer_label = marker_tail(line)
                .chars()
                .next()
                .filter(|c| CHOICE_LABELS.contains(c))
                .unwrap_or('A');
            continue;
        }

        if EXPLANATION_MARKERS.iter().any(|m| line.starts_with(m)) {
            mode = Mode::Explanation;
            explanation_parts.push(marker_tail(line).to_string());
            continue;
        }

        match mode {
            Mode::Question => stem_lines.push(line),
            Mode::Explanation => explanation_parts.push(line.to_string()),
            // Choices and answers are single-line in the bank format; stray
            // lines in those modes have no accumulation target.
            Mode::Choices | Mode::Answer => {}
        }
    }

    ParsedBlock {
        stem: stem_lines.join("\n"),
        choices,
        answer_label,
        explanation: explanation_parts.join("\n"),
    }
}

/// Classify a trimmed line as a choice: first char A–D, second char one of
/// the accepted separators. Returns the label and the text from the third
/// character on, trimmed.
fn split_choice(line: &str) -> Option<(char, String)> {
    let mut chars = line.chars();
    let label = chars.next()?;
    if !CHOICE_LABELS.contains(&label) {
        return None;
    }
    let sep = chars.next()?;
    if !LABEL_SEPARATORS.contains(&sep) {
        return None;
    }
    Some((label, chars.as_str().trim().to_string()))
}

/// Text after the marker colon: split on the fullwidth colon first, then the
/// ASCII one, keeping what follows the last occurrence of each.
fn marker_tail(line: &str) -> &str {
    let tail = line.rsplit('：').next().unwrap_or(line);
    let tail = tail.rsplit(':').next().unwrap_or(tail);
    tail.trim()
}

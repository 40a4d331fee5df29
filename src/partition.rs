use serde::Deserialize;

use crate::record::Question;

/// One configured topic range: 1-based inclusive positions over the parsed
/// sequence, the output file stem, and the human-readable category label.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub start: usize,
    pub end: usize,
    pub file_stem: String,
    pub label: String,
}

#[derive(Debug)]
pub struct TopicGroup {
    pub file_stem: String,
    pub label: String,
    pub questions: Vec<Question>,
}

/// Slice the ordered record list into the configured ranges, stamping each
/// record's category with its topic label. Ranges beyond the end of the
/// sequence yield fewer or zero records; no error.
pub fn partition(questions: &[Question], topics: &[Topic]) -> Vec<TopicGroup> {
    topics
        .iter()
        .map(|topic| {
            let end = topic.end.min(questions.len());
            let start = topic.start.saturating_sub(1).min(end);
            let subset = questions[start..end]
                .iter()
                .map(|q| {
                    let mut q = q.clone();
                    q.category = topic.label.clone();
                    q
                })
                .collect();
            TopicGroup {
                file_stem: topic.file_stem.clone(),
                label: topic.label.clone(),
                questions: subset,
            }
        })
        .collect()
}

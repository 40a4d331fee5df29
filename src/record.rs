use serde::{Deserialize, Serialize};

/// Choice labels in answer-index order: A→0, B→1, C→2, D→3.
pub const CHOICE_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One parsed quiz question. Field order matches the JSON consumed by the
/// quiz apps downstream; `image_name` is reserved and always serializes as
/// null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub question: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
    pub answer_label: String,
    pub explanation: String,
    pub image_name: Option<String>,
}

/// Map a choice label to its answer index. Anything outside A–D falls back
/// to 0, matching the lenient parse contract.
pub fn answer_index(label: char) -> usize {
    CHOICE_LABELS.iter().position(|&c| c == label).unwrap_or(0)
}

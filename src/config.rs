use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::partition::Topic;

/// Per-bank settings: the id prefix stamped on each record and the topic
/// table that drives partitioning.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    pub topics: Vec<Topic>,
}

fn default_id_prefix() -> String {
    "q".to_string()
}

// Built-in table for the class 2 hazardous materials bank: ten genres of
// ten questions each.
const CLASS2_TOPICS: &[(usize, usize, &str, &str)] = &[
    (1, 10, "class2_genre1", "危険物の性状"),
    (11, 20, "class2_genre2", "火災予防と貯蔵"),
    (21, 30, "class2_genre3", "消火方法"),
    (31, 40, "class2_genre4", "硫化リン"),
    (41, 50, "class2_genre5", "赤リン"),
    (51, 60, "class2_genre6", "硫黄"),
    (61, 70, "class2_genre7", "鉄粉"),
    (71, 80, "class2_genre8", "金属粉・マグネシウム"),
    (81, 90, "class2_genre9", "引火性固体"),
    (91, 100, "class2_genre10", "法令・指定数量"),
];

impl BankConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading topic config {}", path.display()))?;
        let config: BankConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing topic config {}", path.display()))?;
        Ok(config)
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            id_prefix: "class2_q".to_string(),
            topics: CLASS2_TOPICS
                .iter()
                .map(|&(start, end, file_stem, label)| Topic {
                    start,
                    end,
                    file_stem: file_stem.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

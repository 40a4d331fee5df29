use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::partition::TopicGroup;

/// Serialize each topic group to `<out_dir>/<file_stem>.json` as a pretty
/// JSON array. Groups already written stay on disk if a later write fails.
pub fn write_groups(out_dir: &Path, groups: &[TopicGroup]) -> Result<Vec<(String, usize)>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(groups.len());
    for group in groups {
        let path = out_dir.join(format!("{}.json", group.file_stem));
        let json = serde_json::to_string_pretty(&group.questions)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        written.push((path.display().to_string(), group.questions.len()));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Question;

    fn group(file_stem: &str, n: usize) -> TopicGroup {
        TopicGroup {
            file_stem: file_stem.to_string(),
            label: "硫黄".to_string(),
            questions: (1..=n)
                .map(|i| Question {
                    id: format!("class2_q{}", i),
                    category: "硫黄".into(),
                    question: "問い".into(),
                    choices: vec!["A. 一".into(), "B. 二".into()],
                    answer_index: 1,
                    answer_label: "B".into(),
                    explanation: String::new(),
                    image_name: None,
                })
                .collect(),
        }
    }

    #[test]
    fn writes_one_file_per_group() {
        let dir = std::env::temp_dir().join("qbank_writer_test");
        let _ = fs::remove_dir_all(&dir);

        let groups = vec![group("class2_genre6", 2), group("class2_genre7", 0)];
        let written = write_groups(&dir, &groups).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].1, 2);
        assert_eq!(written[1].1, 0);

        let raw = fs::read_to_string(dir.join("class2_genre6.json")).unwrap();
        let parsed: Vec<Question> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].category, "硫黄");
        // Non-ASCII text stays unescaped in the file.
        assert!(raw.contains("硫黄"));

        let empty = fs::read_to_string(dir.join("class2_genre7.json")).unwrap();
        assert_eq!(empty.trim(), "[]");

        let _ = fs::remove_dir_all(&dir);
    }
}

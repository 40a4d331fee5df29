pub mod block;
pub mod segment;

use crate::record::{answer_index, Question};

/// Two-pass pipeline: raw text → blocks → records.
pub fn parse_document(text: &str, id_prefix: &str) -> Vec<Question> {
    segment::split_blocks(text)
        .iter()
        .enumerate()
        .map(|(i, body)| build_question(i, body, id_prefix))
        .collect()
}

/// Parse one block into its record. `position` is 0-based; ids are numbered
/// from 1. The category stays empty until partitioning assigns a topic.
pub fn build_question(position: usize, body: &str, id_prefix: &str) -> Question {
    let parsed = block::parse_block(body);
    Question {
        id: format!("{}{}", id_prefix, position + 1),
        category: String::new(),
        question: parsed.stem,
        choices: parsed.choices,
        answer_index: answer_index(parsed.answer_label),
        answer_label: parsed.answer_label.to_string(),
        explanation: parsed.explanation,
        image_name: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_question_document() {
        let text = "\
第1問
次のうち正しいものはどれか。
A. 一
B. 二
C. 三
D. 四
正解：B
解説：二が正しい。
第2問";
        let questions = parse_document(text, "q");
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.id, "q1");
        assert_eq!(first.choices.len(), 4);
        assert_eq!(first.answer_index, 1);
        assert_eq!(first.answer_label, "B");
        assert!(!first.explanation.is_empty());

        let second = &questions[1];
        assert_eq!(second.id, "q2");
        assert!(second.question.is_empty());
        assert!(second.choices.is_empty());
        assert_eq!(second.answer_index, 0);
        assert!(second.explanation.is_empty());
    }

    #[test]
    fn ids_follow_document_order() {
        let text = "第3問\nfoo\n第1問\nbar";
        let questions = parse_document(text, "class2_q");
        // Numbering comes from position, not from the delimiter numeral.
        assert_eq!(questions[0].id, "class2_q1");
        assert_eq!(questions[0].question, "foo");
        assert_eq!(questions[1].id, "class2_q2");
        assert_eq!(questions[1].question, "bar");
    }

    #[test]
    fn image_name_always_null() {
        let questions = parse_document("第1問\nfoo", "q");
        assert!(questions[0].image_name.is_none());
    }

    #[test]
    fn sample_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/class2_sample.txt").unwrap();
        let questions = parse_document(&text, "class2_q");
        assert_eq!(questions.len(), 4);

        assert_eq!(questions[0].answer_label, "C");
        assert_eq!(questions[0].answer_index, 2);
        assert_eq!(questions[0].choices.len(), 4);
        // Explanation continues past the marker line.
        assert!(questions[0].explanation.contains('\n'));

        // Choice separator variants all normalize.
        assert!(questions[1].choices.iter().all(|c| c.as_bytes()[1] == b'.'));
        assert_eq!(questions[1].answer_label, "B");

        // Third question is a bare delimiter.
        assert!(questions[2].question.is_empty());
        assert!(questions[2].choices.is_empty());
        assert_eq!(questions[2].answer_index, 0);

        assert_eq!(questions[3].answer_label, "D");
    }
}

//! Prompt templates sent to the model.
//!
//! Each template is static text with a single `{payload}` slot. Paper text is
//! capped at [`MAX_PAPER_CHARS`] characters before it is interpolated.

use serde::{Deserialize, Serialize};

/// Upper bound on source characters forwarded for a paper summary.
pub const MAX_PAPER_CHARS: usize = 50_000;

const PAYLOAD_SLOT: &str = "{payload}";

pub const CLEAN_PROTOCOL_TEMPLATE: &str = r#"You are an expert Biotech Lab Manager.
Take the following messy lab notes and restructure them into a professional Standard Operating Procedure (SOP).

Output format (Markdown):
# [Title of Experiment]

## 📦 Materials
* List items

## ⚠️ Safety
* List hazards (if any)

## 🧪 Procedure
1. Step one
2. Step two

## 💡 Tips
* Useful advice based on the context.

Here are the notes:
{payload}
"#;

pub const SIMPLIFY_PAPER_TEMPLATE: &str = r#"You are an expert Research Scientist. Explain the following academic paper to a junior student.

Analyze this text:
{payload}

Output Format (Markdown):
## 🎯 Goal
* What problem is this paper trying to solve? (2 sentences max)

## 🔬 Methods
* How did they do it? Simplify the technical terms.

## 📊 Key Findings
* Bullet points of the most important results.

## 🧠 Significance
* Why does this matter to the biotech field?

## 📖 Glossary
* Define 3-5 complex terms used in the paper.
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    CleanProtocol,
    SimplifyPaper,
}

impl PromptKind {
    pub fn template(self) -> &'static str {
        match self {
            Self::CleanProtocol => CLEAN_PROTOCOL_TEMPLATE,
            Self::SimplifyPaper => SIMPLIFY_PAPER_TEMPLATE,
        }
    }
}

/// Interpolates `payload` into the template for `kind`.
///
/// Paper payloads are truncated to [`MAX_PAPER_CHARS`]; lab notes pass through
/// unchanged.
pub fn build(kind: PromptKind, payload: &str) -> String {
    let payload = match kind {
        PromptKind::CleanProtocol => payload,
        PromptKind::SimplifyPaper => truncate_chars(payload, MAX_PAPER_CHARS),
    };
    kind.template().replacen(PAYLOAD_SLOT, payload, 1)
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_protocol_contains_notes_and_headings() {
        let prompt = build(PromptKind::CleanProtocol, "add 5ml buffer, spin 10 min");
        assert!(prompt.contains("Standard Operating Procedure"));
        assert!(prompt.ends_with("Here are the notes:\nadd 5ml buffer, spin 10 min\n"));
        for heading in ["Materials", "Safety", "Procedure", "Tips"] {
            assert!(prompt.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn test_simplify_paper_contains_headings() {
        let prompt = build(PromptKind::SimplifyPaper, "CRISPR screening in yeast");
        assert!(prompt.contains("Analyze this text:\nCRISPR screening in yeast\n"));
        for heading in ["Goal", "Methods", "Key Findings", "Significance", "Glossary"] {
            assert!(prompt.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn test_payload_with_slot_marker_is_inserted_once() {
        let prompt = build(PromptKind::CleanProtocol, "{payload}");
        assert_eq!(prompt.matches(PAYLOAD_SLOT).count(), 1);
        assert!(!prompt.contains("Here are the notes:\n\n"));
    }

    #[test]
    fn test_empty_payload_still_builds() {
        let prompt = build(PromptKind::CleanProtocol, "");
        assert!(prompt.ends_with("Here are the notes:\n\n"));
    }

    #[test]
    fn test_paper_payload_is_capped() {
        let paper = "a".repeat(MAX_PAPER_CHARS + 1234);
        let prompt = build(PromptKind::SimplifyPaper, &paper);
        let template_len = SIMPLIFY_PAPER_TEMPLATE.len() - PAYLOAD_SLOT.len();
        assert_eq!(prompt.len(), template_len + MAX_PAPER_CHARS);
        assert!(!prompt.contains(&"a".repeat(MAX_PAPER_CHARS + 1)));
    }

    #[test]
    fn test_lab_notes_are_not_capped() {
        let notes = "n".repeat(MAX_PAPER_CHARS + 10);
        let prompt = build(PromptKind::CleanProtocol, &notes);
        assert!(prompt.contains(&notes));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("αβγδ", 2), "αβ");
        assert_eq!(truncate_chars("αβ", 5), "αβ");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(
            serde_json::to_value(PromptKind::CleanProtocol).unwrap(),
            serde_json::json!("clean-protocol")
        );
        assert_eq!(
            serde_json::to_value(PromptKind::SimplifyPaper).unwrap(),
            serde_json::json!("simplify-paper")
        );
    }
}

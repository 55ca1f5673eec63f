use serde::Serialize;

/// A technique the model flagged as present or recommended, together with
/// its stated reason. Basic-rubric payloads carry bare technique names; those
/// are normalized into findings with an empty rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueFinding {
    /// Technique name as reported by the model
    pub name: String,
    /// The model's reason for flagging the technique
    pub rationale: String,
}

impl TechniqueFinding {
    /// Build a finding from a bare technique name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rationale: String::new(),
        }
    }
}

/// Decoded verdict for a single analyzed prompt. Produced once per run and
/// discarded after rendering.
///
/// Every sequence field must be present in the wire payload; empty lists are
/// valid, absent keys are not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptAnalysis {
    /// Overall score, 0 to 100
    pub score: u8,
    /// The model's categorization of the task the prompt describes
    pub task_category: String,
    /// Techniques suited to this kind of task
    pub applicable_techniques: Vec<String>,
    /// Techniques already used in the prompt
    pub found_techniques: Vec<TechniqueFinding>,
    /// Techniques the prompt would benefit from
    pub suggested_techniques: Vec<TechniqueFinding>,
    /// Strong points of the prompt
    pub strengths: Vec<String>,
    /// Weak points of the prompt
    pub weaknesses: Vec<String>,
    /// Concrete improvement suggestions
    pub recommendations: Vec<String>,
    /// The model's rewritten version of the prompt
    pub improved_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_finding_has_empty_rationale() {
        let finding = TechniqueFinding::named("Few-Shot");
        assert_eq!(finding.name, "Few-Shot");
        assert!(finding.rationale.is_empty());
    }

    #[test]
    fn test_analysis_serializes_all_fields() {
        let analysis = PromptAnalysis {
            score: 82,
            task_category: "data analysis".to_string(),
            applicable_techniques: vec!["Chain of Thought".to_string()],
            found_techniques: vec![TechniqueFinding {
                name: "Zero-Shot".to_string(),
                rationale: "direct instruction".to_string(),
            }],
            suggested_techniques: vec![],
            strengths: vec!["clear goal".to_string()],
            weaknesses: vec![],
            recommendations: vec!["add format spec".to_string()],
            improved_prompt: "rewritten".to_string(),
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["score"], 82);
        assert_eq!(json["found_techniques"][0]["name"], "Zero-Shot");
        assert_eq!(json["suggested_techniques"].as_array().unwrap().len(), 0);
        assert_eq!(json["improved_prompt"], "rewritten");
    }
}

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Skill – one of the six rated dimensions
// ---------------------------------------------------------------------------

/// A rated skill dimension.
///
/// The declaration order is the radar layout order and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Skill {
    Communication,
    BodyLanguage,
    DomainKnowledge,
    AnalyticalThinking,
    Leadership,
    CulturalFit,
}

impl Skill {
    /// All skills in chart order.
    pub const ALL: [Skill; 6] = [
        Skill::Communication,
        Skill::BodyLanguage,
        Skill::DomainKnowledge,
        Skill::AnalyticalThinking,
        Skill::Leadership,
        Skill::CulturalFit,
    ];

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Skill::Communication => "Communication",
            Skill::BodyLanguage => "Body Language",
            Skill::DomainKnowledge => "Domain Knowledge",
            Skill::AnalyticalThinking => "Analytical Thinking",
            Skill::Leadership => "Leadership",
            Skill::CulturalFit => "Cultural Fit",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// EvaluationRecord – one row of the survey export
// ---------------------------------------------------------------------------

/// A single panel evaluation (one row of the source CSV).
///
/// Records have no identifier besides their position in the loaded
/// sequence; two rows for the same student are two distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    /// Submission time, kept verbatim.
    pub timestamp: String,
    pub email: String,
    pub panelist_name: String,
    pub student_name: String,

    pub communication: u8,
    pub body_language: u8,
    pub domain_knowledge: u8,
    pub analytical_thinking: u8,
    pub leadership: u8,
    pub cultural_fit: u8,

    /// Short narrative verdict.
    pub overall: String,
    /// Longer qualitative comments.
    pub feedback: String,
}

impl EvaluationRecord {
    /// Rating for one skill dimension.
    pub fn rating(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Communication => self.communication,
            Skill::BodyLanguage => self.body_language,
            Skill::DomainKnowledge => self.domain_knowledge,
            Skill::AnalyticalThinking => self.analytical_thinking,
            Skill::Leadership => self.leadership,
            Skill::CulturalFit => self.cultural_fit,
        }
    }

    /// The six ratings in chart order.
    pub fn ratings(&self) -> [u8; 6] {
        Skill::ALL.map(|skill| self.rating(skill))
    }
}

#[cfg(test)]
pub(crate) fn sample_record(student_name: &str, ratings: [u8; 6]) -> EvaluationRecord {
    EvaluationRecord {
        timestamp: "2024-01-01".to_string(),
        email: "panel@example.com".to_string(),
        panelist_name: "Jane".to_string(),
        student_name: student_name.to_string(),
        communication: ratings[0],
        body_language: ratings[1],
        domain_knowledge: ratings[2],
        analytical_thinking: ratings[3],
        leadership: ratings[4],
        cultural_fit: ratings[5],
        overall: "Recommended".to_string(),
        feedback: "Clear and structured answers".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_follow_skill_order() {
        let record = sample_record("Alex Kim", [1, 2, 3, 4, 5, 3]);
        assert_eq!(record.ratings(), [1, 2, 3, 4, 5, 3]);
        assert_eq!(record.rating(Skill::Leadership), 5);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(Skill::BodyLanguage.to_string(), "Body Language");
        assert_eq!(Skill::ALL[0].label(), "Communication");
        assert_eq!(Skill::ALL[5].label(), "Cultural Fit");
    }
}

use std::fmt;

use serde::Serialize;

use super::model::{EvaluationRecord, Skill};

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Qualitative category of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Strong,
    Good,
    Fair,
    Weak,
}

impl Band {
    pub fn as_str(self) -> &'static str {
        match self {
            Band::Strong => "strong",
            Band::Good => "good",
            Band::Fair => "fair",
            Band::Weak => "weak",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds, checked top-down; first match wins.
pub const BAND_THRESHOLDS: [(f64, Band); 3] = [
    (4.5, Band::Strong),
    (3.5, Band::Good),
    (2.5, Band::Fair),
];

/// Band for a score. Anything below every threshold is [`Band::Weak`].
pub fn band(score: f64) -> Band {
    BAND_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(Band::Weak, |(_, band)| *band)
}

// ---------------------------------------------------------------------------
// Average score
// ---------------------------------------------------------------------------

/// Mean of the six ratings, rounded to one decimal place.
///
/// The rounded value is what gets displayed and banded.
pub fn average_score(record: &EvaluationRecord) -> f64 {
    let total: u32 = record.ratings().iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(total) / Skill::ALL.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// One-decimal rendering, e.g. `"4.3"`.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

// ---------------------------------------------------------------------------
// Chart points
// ---------------------------------------------------------------------------

/// One radar axis: skill label and its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub skill: &'static str,
    pub value: u8,
}

/// The six chart points in fixed skill order.
pub fn chart_points(record: &EvaluationRecord) -> [ChartPoint; 6] {
    Skill::ALL.map(|skill| ChartPoint {
        skill: skill.label(),
        value: record.rating(skill),
    })
}

// ---------------------------------------------------------------------------
// Exportable summary
// ---------------------------------------------------------------------------

/// Display-ready view of one record, serialisable for clipboard export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary<'a> {
    pub student_name: &'a str,
    pub panelist_name: &'a str,
    pub timestamp: &'a str,
    pub average_score: String,
    pub band: Band,
    pub chart: [ChartPoint; 6],
    pub overall: &'a str,
    pub feedback: &'a str,
}

impl<'a> RecordSummary<'a> {
    pub fn new(record: &'a EvaluationRecord) -> Self {
        let average = average_score(record);
        RecordSummary {
            student_name: &record.student_name,
            panelist_name: &record.panelist_name,
            timestamp: &record.timestamp,
            average_score: format_score(average),
            band: band(average),
            chart: chart_points(record),
            overall: &record.overall,
            feedback: &record.feedback,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::sample_record;

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(band(5.0), Band::Strong);
        assert_eq!(band(4.5), Band::Strong);
        assert_eq!(band(4.49), Band::Good);
        assert_eq!(band(3.5), Band::Good);
        assert_eq!(band(3.49), Band::Fair);
        assert_eq!(band(2.5), Band::Fair);
        assert_eq!(band(2.4), Band::Weak);
        assert_eq!(band(0.0), Band::Weak);
    }

    #[test]
    fn band_names() {
        assert_eq!(Band::Strong.to_string(), "strong");
        assert_eq!(Band::Weak.as_str(), "weak");
    }

    #[test]
    fn average_of_perfect_scores() {
        let record = sample_record("Anaya", [5; 6]);
        assert_eq!(format_score(average_score(&record)), "5.0");
    }

    #[test]
    fn average_of_mixed_scores() {
        let record = sample_record("Anaya", [1, 2, 3, 4, 5, 3]);
        assert_eq!(format_score(average_score(&record)), "3.0");

        let record = sample_record("Alex Kim", [5, 4, 3, 5, 4, 5]);
        assert_eq!(format_score(average_score(&record)), "4.3");
    }

    #[test]
    fn average_band_uses_displayed_value() {
        // 27 / 6 = 4.4667, shown as 4.5
        let record = sample_record("Susan", [5, 5, 5, 4, 4, 4]);
        let average = average_score(&record);
        assert_eq!(format_score(average), "4.5");
        assert_eq!(band(average), Band::Strong);
    }

    #[test]
    fn chart_points_in_fixed_order() {
        let record = sample_record("Alex Kim", [5, 4, 3, 5, 4, 2]);
        let points = chart_points(&record);
        let labels: Vec<_> = points.iter().map(|p| p.skill).collect();
        assert_eq!(
            labels,
            vec![
                "Communication",
                "Body Language",
                "Domain Knowledge",
                "Analytical Thinking",
                "Leadership",
                "Cultural Fit",
            ]
        );
        let values: Vec<_> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5, 4, 3, 5, 4, 2]);
        assert_eq!(chart_points(&record), points);
    }

    #[test]
    fn summary_json_shape() {
        let record = sample_record("Alex Kim", [5, 4, 3, 5, 4, 5]);
        let json = RecordSummary::new(&record).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["studentName"], "Alex Kim");
        assert_eq!(value["averageScore"], "4.3");
        assert_eq!(value["band"], "good");
        assert_eq!(value["chart"][0]["skill"], "Communication");
        assert_eq!(value["chart"][5]["value"], 5);
    }
}

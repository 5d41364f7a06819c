use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{RiskAssessment, RiskTier};
use crate::risk::RiskScoringEngine;

/// Historical assessment entry, handed to the caller for persistence.
///
/// Older entries may carry only a score; the tier is then re-derived
/// through the engine instead of being guessed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
    #[serde(default)]
    pub summary: Option<String>,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            score: assessment.score,
            risk_tier: Some(assessment.risk_tier),
            summary: Some(assessment.summary.clone()),
            assessed_at: Utc::now(),
        }
    }

    /// Stored tier, or the tier the engine assigns to the stored score
    pub fn resolved_tier(&self, engine: &RiskScoringEngine) -> RiskTier {
        self.risk_tier.unwrap_or_else(|| engine.classify(self.score))
    }

    /// Fill in a missing tier from the score
    pub fn with_resolved_tier(mut self, engine: &RiskScoringEngine) -> Self {
        self.risk_tier = Some(self.resolved_tier(engine));
        self
    }

    pub fn display_color(&self, engine: &RiskScoringEngine) -> &'static str {
        self.resolved_tier(engine).display_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tier_is_rederived() {
        let engine = RiskScoringEngine::new();
        let json = r#"{
            "id": "6f1c8f3e-2b7a-4c1e-9a55-2d3f4e5a6b7c",
            "score": 61,
            "assessed_at": "2024-03-01T12:00:00Z"
        }"#;

        let record: AssessmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.risk_tier, None);
        assert_eq!(record.resolved_tier(&engine), RiskTier::High);
        assert_eq!(record.display_color(&engine), "#f97316");
        assert_eq!(record.with_resolved_tier(&engine).risk_tier, Some(RiskTier::High));
    }
}

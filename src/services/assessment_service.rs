use tracing::{info, warn};

use crate::models::{AssessmentRecord, FinancialProfile, FinancialSnapshot, RiskAssessment};
use crate::risk::{RiskError, RiskScoringEngine};

/// Caller-side glue around the engine: turns profiles into snapshots and
/// assessments into history records. Persisting them is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    engine: RiskScoringEngine,
}

impl AssessmentService {
    pub fn new(engine: RiskScoringEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RiskScoringEngine {
        &self.engine
    }

    /// Assess a profile's current records.
    ///
    /// Records are validated individually first so a negative entry cannot
    /// be netted away in the aggregates.
    pub fn assess_profile(&self, profile: &FinancialProfile) -> Result<RiskAssessment, RiskError> {
        if let Err(e) = profile.validate() {
            warn!(error = %e, "Rejected financial profile");
            return Err(e);
        }
        self.engine.assess(&profile.to_snapshot())
    }

    /// Re-assess after a change to a profile's financial data.
    ///
    /// Returns `Ok(None)` without scoring while the profile is incomplete.
    pub fn reassess_on_change(
        &self,
        profile: &FinancialProfile,
    ) -> Result<Option<AssessmentRecord>, RiskError> {
        if !profile.has_complete_profile() {
            info!(
                incomes = profile.incomes.len(),
                expenses = profile.expenses.len(),
                debts = profile.debts.len(),
                assets = profile.assets.len(),
                "Profile incomplete, skipping risk assessment"
            );
            return Ok(None);
        }

        let assessment = self.assess_profile(profile)?;
        let record = AssessmentRecord::from_assessment(&assessment);
        info!(
            record_id = %record.id,
            score = record.score,
            "Created risk assessment record"
        );
        Ok(Some(record))
    }

    /// Assess unrelated snapshots independently; results keep input order
    /// and one bad snapshot does not affect the others.
    pub fn assess_batch(&self, snapshots: &[FinancialSnapshot]) -> Vec<Result<RiskAssessment, RiskError>> {
        let results: Vec<_> = snapshots.iter().map(|s| self.engine.assess(s)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(total = snapshots.len(), failed = failed, "Some snapshots failed validation");
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, AssetType, Expense, ExpenseCategory, Frequency, Income};
    use rust_decimal::Decimal;

    #[test]
    fn test_incomplete_profile_is_skipped() {
        let service = AssessmentService::default();
        let profile = FinancialProfile {
            incomes: vec![Income {
                source_name: "Salary".to_string(),
                amount: Decimal::from(4000),
                frequency: Frequency::Monthly,
            }],
            expenses: vec![Expense {
                category: ExpenseCategory::Housing,
                amount: Decimal::from(1500),
                frequency: Frequency::Monthly,
            }],
            ..Default::default()
        };

        assert_eq!(service.reassess_on_change(&profile).unwrap(), None);
    }

    #[test]
    fn test_negative_records_are_rejected_before_aggregation() {
        let service = AssessmentService::default();
        let profile = FinancialProfile {
            incomes: vec![
                Income {
                    source_name: "Salary".to_string(),
                    amount: Decimal::from(5000),
                    frequency: Frequency::Monthly,
                },
                Income {
                    source_name: "Refund".to_string(),
                    amount: Decimal::from(-4000),
                    frequency: Frequency::Monthly,
                },
            ],
            expenses: vec![Expense {
                category: ExpenseCategory::Housing,
                amount: Decimal::from(1500),
                frequency: Frequency::Monthly,
            }],
            assets: vec![
                Asset {
                    asset_name: "Checking".to_string(),
                    asset_type: AssetType::Checking,
                    value: Decimal::from(-100),
                },
                Asset {
                    asset_name: "Savings".to_string(),
                    asset_type: AssetType::Savings,
                    value: Decimal::from(5000),
                },
            ],
            ..Default::default()
        };

        let err = service.assess_profile(&profile).unwrap_err();
        assert_eq!(err.field(), Some("incomes[1].amount"));
        let err = service.reassess_on_change(&profile).unwrap_err();
        assert_eq!(err.field(), Some("incomes[1].amount"));
    }

    #[test]
    fn test_huge_weekly_income_scores_without_panicking() {
        let service = AssessmentService::default();
        let profile = FinancialProfile {
            incomes: vec![Income {
                source_name: "Fund".to_string(),
                amount: Decimal::from_i128_with_scale(30_000_000_000_000_000_000_000_000_000, 0),
                frequency: Frequency::Weekly,
            }],
            ..Default::default()
        };

        let assessment = service.assess_profile(&profile).unwrap();
        assert_eq!(assessment.factor_scores.income_stability, 70);
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let service = AssessmentService::default();
        let bad = FinancialSnapshot {
            monthly_expenses: Decimal::from(-5),
            ..Default::default()
        };
        let results = service.assess_batch(&[FinancialSnapshot::default(), bad, FinancialSnapshot::default()]);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[0], results[2]);
    }
}

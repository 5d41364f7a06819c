// Human-readable explanation of an assessment
use crate::models::{RiskFactor, RiskFactorScores, RiskTier};

/// A recommendation appended when its factor's raw risk exceeds `above`
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub factor: RiskFactor,
    pub above: u8,
    pub sentence: &'static str,
}

/// Evaluated in this order; the order is part of the output contract.
pub static RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        factor: RiskFactor::DebtToIncomeRatio,
        above: 50,
        sentence: "Consider reducing debt payments or increasing income.",
    },
    Recommendation {
        factor: RiskFactor::EmergencyFundRatio,
        above: 70,
        sentence: "Build an emergency fund covering 3-6 months of expenses.",
    },
    Recommendation {
        factor: RiskFactor::HighInterestDebt,
        above: 60,
        sentence: "Focus on paying down high-interest debt first.",
    },
    Recommendation {
        factor: RiskFactor::ExpenseCoverage,
        above: 70,
        sentence: "Review expenses and create a budget to live within your means.",
    },
];

/// Opening sentence for each tier
pub fn headline(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::VeryLow => "Your financial risk is very low. You have excellent financial health.",
        RiskTier::Low => "Your financial risk is low. You have good financial stability.",
        RiskTier::Moderate => "Your financial risk is moderate. There are areas for improvement.",
        RiskTier::High => "Your financial risk is high. Consider addressing key issues.",
        RiskTier::VeryHigh => "Your financial risk is very high. Immediate action recommended.",
    }
}

/// Recommendations triggered by the raw factor values, in fixed order
pub fn recommendations(factors: &RiskFactorScores) -> impl Iterator<Item = &'static str> + '_ {
    RECOMMENDATIONS
        .iter()
        .filter(move |rec| factors.get(rec.factor) > rec.above)
        .map(|rec| rec.sentence)
}

/// Headline followed by any recommendations, joined with single spaces.
pub fn summarize(tier: RiskTier, factors: &RiskFactorScores) -> String {
    std::iter::once(headline(tier))
        .chain(recommendations(factors))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_only_when_no_guard_holds() {
        let factors = RiskFactorScores {
            debt_to_income_ratio: 50,
            emergency_fund_ratio: 70,
            high_interest_debt: 60,
            income_stability: 100,
            expense_coverage: 70,
            debt_diversity: 80,
        };

        assert_eq!(summarize(RiskTier::Moderate, &factors), headline(RiskTier::Moderate));
    }

    #[test]
    fn test_recommendations_keep_fixed_order() {
        let factors = RiskFactorScores {
            debt_to_income_ratio: 0,
            emergency_fund_ratio: 85,
            high_interest_debt: 0,
            income_stability: 0,
            expense_coverage: 95,
            debt_diversity: 0,
        };

        let summary = summarize(RiskTier::Low, &factors);
        assert_eq!(
            summary,
            "Your financial risk is low. You have good financial stability. \
             Build an emergency fund covering 3-6 months of expenses. \
             Review expenses and create a budget to live within your means."
        );
    }
}

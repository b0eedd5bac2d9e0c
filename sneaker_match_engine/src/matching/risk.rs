use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::db_types::effective_credibility;

/// How risky trading with a counterparty looks, judged purely on their credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `> 10` is low risk, `> -5` is medium risk, anything else is high risk.
    pub fn from_credibility(credibility_score: i64) -> Self {
        if credibility_score > 10 {
            RiskLevel::Low
        } else if credibility_score > -5 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl From<Option<i64>> for RiskLevel {
    fn from(credibility_score: Option<i64>) -> Self {
        Self::from_credibility(effective_credibility(credibility_score))
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(RiskLevel::from_credibility(11).label(), "Low Risk");
        assert_eq!(RiskLevel::from_credibility(10).label(), "Medium Risk");
        assert_eq!(RiskLevel::from_credibility(-4).label(), "Medium Risk");
        assert_eq!(RiskLevel::from_credibility(-5).label(), "High Risk");
        assert_eq!(RiskLevel::from_credibility(-100), RiskLevel::High);
        assert_eq!(RiskLevel::from_credibility(95), RiskLevel::Low);
    }

    #[test]
    fn missing_score_is_medium() {
        assert_eq!(RiskLevel::from(None), RiskLevel::Medium);
        assert_eq!(RiskLevel::from(Some(42)).to_string(), "Low Risk");
    }
}

//! Rule-based claim risk scoring.
//!
//! Scores a structured claim submission (not a document) against fixed
//! underwriting rules. Interpretable baseline intended to be swapped for a
//! trained model later.

use serde::{Deserialize, Serialize};

/// Risk bands for a scored claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Claim attributes considered by the rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimRiskInput {
    pub claim_id: String,
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub is_third_party: bool,
    #[serde(default)]
    pub previous_claims_count: u32,
}

/// Scored claim with the reasons that fired.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRiskScore {
    pub claim_id: String,
    pub risk_level: RiskLevel,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Description words that add risk on their own.
const SUSPICIOUS_CLAIM_WORDS: &[&str] = &[
    "sudden", "stolen", "lost", "fire", "cash", "urgent", "fake", "duplicate",
];

/// Score a claim against the rule set.
///
/// Rules accumulate into a score capped at 100: very high amounts (+40 over
/// 500 000, +25 over 200 000), claim history (+25 over three priors, +10
/// over one), suspicious wording (+20), third-party claims (+10). High risk
/// at 60+, medium at 30+.
pub fn score_claim(claim: &ClaimRiskInput) -> ClaimRiskScore {
    let mut score: f64 = 0.0;
    let mut reasons = Vec::new();

    if claim.amount > 500_000.0 {
        score += 40.0;
        reasons.push("Claim amount is very high.".to_string());
    } else if claim.amount > 200_000.0 {
        score += 25.0;
        reasons.push("Claim amount is high.".to_string());
    }

    if claim.previous_claims_count > 3 {
        score += 25.0;
        reasons.push("Customer has many previous claims.".to_string());
    } else if claim.previous_claims_count > 1 {
        score += 10.0;
        reasons.push("Customer has some previous claims.".to_string());
    }

    let description_lower = claim.description.to_lowercase();
    let hits: Vec<&str> = SUSPICIOUS_CLAIM_WORDS
        .iter()
        .copied()
        .filter(|word| description_lower.contains(word))
        .collect();
    if !hits.is_empty() {
        score += 20.0;
        reasons.push(format!("Suspicious keywords found: {}", hits.join(", ")));
    }

    if claim.is_third_party {
        score += 10.0;
        reasons.push("Third-party claim.".to_string());
    }

    let score = score.min(100.0);

    let risk_level = if score >= 60.0 {
        RiskLevel::High
    } else if score >= 30.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    if reasons.is_empty() {
        reasons.push("No obvious fraud indicators detected.".to_string());
    }

    ClaimRiskScore {
        claim_id: claim.claim_id.clone(),
        risk_level,
        score,
        reasons,
    }
}

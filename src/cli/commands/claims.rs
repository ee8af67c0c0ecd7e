//! Claim risk scoring command.

use docsense::services::claim_score::{score_claim, ClaimRiskInput};

/// Score a structured claim and print the result.
pub fn cmd_score_claim(
    claim_id: String,
    amount: f64,
    description: String,
    third_party: bool,
    previous_claims: u32,
) -> anyhow::Result<()> {
    let result = score_claim(&ClaimRiskInput {
        claim_id,
        amount,
        description,
        is_third_party: third_party,
        previous_claims_count: previous_claims,
    });

    println!("Claim:  {}", result.claim_id);
    println!("Risk:   {} ({:.0}/100)", result.risk_level.as_str(), result.score);
    println!("Reasons:");
    for reason in &result.reasons {
        println!("  - {reason}");
    }
    Ok(())
}

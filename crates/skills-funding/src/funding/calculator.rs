use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Applicant, CostRange, FundingProgram, Jurisdiction};
use super::evaluation::{verdict_for, Verdict};

/// A program the applicant does not qualify for, paired with the failed criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IneligibleProgram {
    pub program: FundingProgram,
    pub reason: String,
}

/// Aggregate outcome of evaluating every program in the applicant's jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub jurisdiction: Jurisdiction,
    pub eligible_programs: Vec<FundingProgram>,
    pub ineligible_programs: Vec<IneligibleProgram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<CostRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_fee: Option<CostRange>,
}

impl CalculationResult {
    /// Eligible program the estimated cost was taken from.
    pub fn best_program(&self) -> Option<&FundingProgram> {
        cheapest(&self.eligible_programs)
    }

    pub fn primary_programs(&self) -> impl Iterator<Item = &FundingProgram> {
        self.eligible_programs
            .iter()
            .filter(|program| program.is_primary)
    }

    pub fn has_eligible_programs(&self) -> bool {
        !self.eligible_programs.is_empty()
    }
}

/// Evaluate every program in the applicant's jurisdiction and derive the best-case cost.
///
/// Programs from other jurisdictions are ignored entirely. The estimated cost comes from the
/// eligible program with the lowest minimum contribution; programs without a contribution are
/// never selected, and ties keep whichever program appears first in `programs`.
pub fn calculate(applicant: &Applicant, programs: &[FundingProgram]) -> CalculationResult {
    let mut eligible_programs = Vec::new();
    let mut ineligible_programs = Vec::new();

    for program in programs
        .iter()
        .filter(|program| program.jurisdiction == applicant.jurisdiction)
    {
        match verdict_for(&program.eligibility, applicant) {
            Verdict::Eligible => {
                debug!(program = %program.id, "applicant eligible");
                eligible_programs.push(program.clone());
            }
            Verdict::Ineligible(reason) => {
                debug!(
                    program = %program.id,
                    criterion = reason.criterion(),
                    "applicant ineligible"
                );
                ineligible_programs.push(IneligibleProgram {
                    program: program.clone(),
                    reason: reason.summary(),
                });
            }
        }
    }

    let estimated_cost = cheapest(&eligible_programs).and_then(|program| program.student_contribution);
    let full_fee = applicant.course_fee.map(CostRange::fixed);

    debug!(
        jurisdiction = %applicant.jurisdiction,
        eligible = eligible_programs.len(),
        ineligible = ineligible_programs.len(),
        ?estimated_cost,
        "funding calculation complete"
    );

    CalculationResult {
        jurisdiction: applicant.jurisdiction,
        eligible_programs,
        ineligible_programs,
        estimated_cost,
        full_fee,
    }
}

fn cheapest(programs: &[FundingProgram]) -> Option<&FundingProgram> {
    let mut best: Option<(&FundingProgram, u32)> = None;

    for program in programs {
        let Some(contribution) = program.student_contribution else {
            continue;
        };
        match best {
            Some((_, lowest)) if contribution.min >= lowest => {}
            _ => best = Some((program, contribution.min)),
        }
    }

    best.map(|(program, _)| program)
}

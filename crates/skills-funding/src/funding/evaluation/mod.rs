mod policy;
mod rules;

pub use policy::{IneligibilityReason, Verdict};

use super::domain::{Applicant, EligibilityCriteria, FundingProgram};
use super::intake::ContractViolation;

/// Evaluate a single program's criteria against an applicant.
///
/// Checks run in a fixed order and the first failure decides the verdict. Optional applicant
/// fields that were not supplied never disqualify. Pairing an applicant with a program from
/// another jurisdiction is a caller bug and is reported as a [`ContractViolation`].
pub fn evaluate(
    program: &FundingProgram,
    applicant: &Applicant,
) -> Result<Verdict, ContractViolation> {
    if program.jurisdiction != applicant.jurisdiction {
        return Err(ContractViolation::JurisdictionMismatch {
            program_id: program.id.clone(),
            program: program.jurisdiction,
            applicant: applicant.jurisdiction,
        });
    }

    Ok(verdict_for(&program.eligibility, applicant))
}

pub(crate) fn verdict_for(criteria: &EligibilityCriteria, applicant: &Applicant) -> Verdict {
    match rules::first_failure(criteria, applicant) {
        Some(reason) => Verdict::Ineligible(reason),
        None => Verdict::Eligible,
    }
}

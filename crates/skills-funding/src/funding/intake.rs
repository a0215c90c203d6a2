use super::domain::{Applicant, FundingCalculatorInput, Jurisdiction};

/// Caller-contract violations. These indicate a bug in the calling code, never a business
/// outcome, and are surfaced instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("applicant jurisdiction is required")]
    MissingJurisdiction,
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),
    #[error("applicant citizenship/permanent residency flag is required")]
    MissingCitizenship,
    #[error("program '{program_id}' belongs to {program} but applicant is in {applicant}")]
    JurisdictionMismatch {
        program_id: String,
        program: Jurisdiction,
        applicant: Jurisdiction,
    },
}

impl TryFrom<FundingCalculatorInput> for Applicant {
    type Error = ContractViolation;

    fn try_from(input: FundingCalculatorInput) -> Result<Self, Self::Error> {
        let raw_jurisdiction = input
            .jurisdiction
            .filter(|value| !value.trim().is_empty())
            .ok_or(ContractViolation::MissingJurisdiction)?;

        let jurisdiction = raw_jurisdiction
            .parse::<Jurisdiction>()
            .map_err(|_| ContractViolation::UnknownJurisdiction(raw_jurisdiction.clone()))?;

        let is_citizen_or_pr = input
            .is_citizen_or_pr
            .ok_or(ContractViolation::MissingCitizenship)?;

        Ok(Applicant {
            jurisdiction,
            is_citizen_or_pr,
            age: input.age,
            employment_status: input.employment_status,
            prior_qualification: input.prior_qualification,
            course_fee: input.course_fee,
        })
    }
}

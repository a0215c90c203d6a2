use super::super::domain::{Applicant, EligibilityCriteria};
use super::policy::IneligibilityReason;

type Check = fn(&EligibilityCriteria, &Applicant) -> Option<IneligibilityReason>;

/// Evaluation order; earlier checks win.
const ORDERED_CHECKS: [Check; 5] = [
    citizenship,
    minimum_age,
    maximum_age,
    employment_status,
    prior_qualification,
];

pub(crate) fn first_failure(
    criteria: &EligibilityCriteria,
    applicant: &Applicant,
) -> Option<IneligibilityReason> {
    ORDERED_CHECKS
        .iter()
        .find_map(|check| check(criteria, applicant))
}

fn citizenship(criteria: &EligibilityCriteria, applicant: &Applicant) -> Option<IneligibilityReason> {
    (criteria.citizenship_required && !applicant.is_citizen_or_pr)
        .then_some(IneligibilityReason::CitizenshipRequired)
}

fn minimum_age(criteria: &EligibilityCriteria, applicant: &Applicant) -> Option<IneligibilityReason> {
    let age = applicant.age?;
    let min_age = criteria.min_age?;
    (age < min_age).then_some(IneligibilityReason::BelowMinimumAge { min_age })
}

fn maximum_age(criteria: &EligibilityCriteria, applicant: &Applicant) -> Option<IneligibilityReason> {
    let age = applicant.age?;
    let max_age = criteria.max_age?;
    (age > max_age).then_some(IneligibilityReason::AboveMaximumAge { max_age })
}

fn employment_status(
    criteria: &EligibilityCriteria,
    applicant: &Applicant,
) -> Option<IneligibilityReason> {
    let allowed = criteria.employment_constraint()?;
    let status = applicant.employment_status?;
    if allowed.contains(&status) {
        return None;
    }

    Some(IneligibilityReason::EmploymentStatusNotAllowed {
        allowed: allowed.to_vec(),
    })
}

fn prior_qualification(
    criteria: &EligibilityCriteria,
    applicant: &Applicant,
) -> Option<IneligibilityReason> {
    let ceiling = criteria.prior_qualification_level?;
    let level = applicant.prior_qualification?;
    if ceiling.admits(level) {
        return None;
    }

    Some(IneligibilityReason::QualificationTooHigh { ceiling })
}

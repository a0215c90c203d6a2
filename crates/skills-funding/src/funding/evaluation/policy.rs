use serde::{Deserialize, Serialize};

use super::super::domain::{EmploymentStatus, QualificationCeiling};

/// Outcome for one applicant against one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "VerdictView")]
pub enum Verdict {
    Eligible,
    Ineligible(IneligibilityReason),
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::Eligible)
    }

    /// One-sentence explanation, present only for ineligible verdicts.
    pub fn reason(&self) -> Option<String> {
        match self {
            Verdict::Eligible => None,
            Verdict::Ineligible(reason) => Some(reason.summary()),
        }
    }
}

#[derive(Serialize)]
struct VerdictView {
    eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<Verdict> for VerdictView {
    fn from(verdict: Verdict) -> Self {
        Self {
            eligible: verdict.is_eligible(),
            reason: verdict.reason(),
        }
    }
}

/// The single criterion an applicant failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum IneligibilityReason {
    CitizenshipRequired,
    BelowMinimumAge { min_age: u8 },
    AboveMaximumAge { max_age: u8 },
    EmploymentStatusNotAllowed { allowed: Vec<EmploymentStatus> },
    QualificationTooHigh { ceiling: QualificationCeiling },
}

impl IneligibilityReason {
    pub const fn criterion(&self) -> &'static str {
        match self {
            IneligibilityReason::CitizenshipRequired => "citizenship",
            IneligibilityReason::BelowMinimumAge { .. } => "min_age",
            IneligibilityReason::AboveMaximumAge { .. } => "max_age",
            IneligibilityReason::EmploymentStatusNotAllowed { .. } => "employment_status",
            IneligibilityReason::QualificationTooHigh { .. } => "prior_qualification",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            IneligibilityReason::CitizenshipRequired => {
                "Australian citizenship or permanent residency is required.".to_string()
            }
            IneligibilityReason::BelowMinimumAge { min_age } => {
                format!("Applicants must be at least {min_age} years old.")
            }
            IneligibilityReason::AboveMaximumAge { max_age } => {
                format!("Applicants must be {max_age} years old or younger.")
            }
            IneligibilityReason::EmploymentStatusNotAllowed { allowed } => {
                let allowed: Vec<&str> = allowed.iter().map(|status| status.code()).collect();
                format!("Employment status must be one of: {}.", allowed.join(", "))
            }
            IneligibilityReason::QualificationTooHigh { .. } => {
                "Qualification level too high for this program.".to_string()
            }
        }
    }
}

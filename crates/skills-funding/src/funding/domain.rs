use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Australian state or territory whose funding programs are being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Nsw,
            Self::Vic,
            Self::Qld,
            Self::Wa,
            Self::Sa,
            Self::Tas,
            Self::Act,
            Self::Nt,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Nsw => "nsw",
            Self::Vic => "vic",
            Self::Qld => "qld",
            Self::Wa => "wa",
            Self::Sa => "sa",
            Self::Tas => "tas",
            Self::Act => "act",
            Self::Nt => "nt",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nsw => "New South Wales",
            Self::Vic => "Victoria",
            Self::Qld => "Queensland",
            Self::Wa => "Western Australia",
            Self::Sa => "South Australia",
            Self::Tas => "Tasmania",
            Self::Act => "Australian Capital Territory",
            Self::Nt => "Northern Territory",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|jurisdiction| jurisdiction.code() == normalized)
            .ok_or_else(|| UnknownCode::new("jurisdiction", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    Seeking,
}

impl EmploymentStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Employed, Self::Unemployed, Self::Seeking]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::Unemployed => "unemployed",
            Self::Seeking => "seeking",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EmploymentStatus {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|status| status.code() == normalized)
            .ok_or_else(|| UnknownCode::new("employment status", value))
    }
}

/// Highest qualification an applicant already holds, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualificationLevel {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "cert-i-ii")]
    CertIOrII,
    #[serde(rename = "cert-iii")]
    CertIII,
    #[serde(rename = "cert-iv")]
    CertIV,
    #[serde(rename = "diploma")]
    Diploma,
    #[serde(rename = "degree")]
    Degree,
}

impl QualificationLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::None,
            Self::CertIOrII,
            Self::CertIII,
            Self::CertIV,
            Self::Diploma,
            Self::Degree,
        ]
    }

    /// Ordinal used by the qualification ceiling check.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::None => 0,
            Self::CertIOrII => 1,
            Self::CertIII => 2,
            Self::CertIV => 3,
            Self::Diploma => 4,
            Self::Degree => 5,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CertIOrII => "cert-i-ii",
            Self::CertIII => "cert-iii",
            Self::CertIV => "cert-iv",
            Self::Diploma => "diploma",
            Self::Degree => "degree",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No post-school qualification",
            Self::CertIOrII => "Certificate I or II",
            Self::CertIII => "Certificate III",
            Self::CertIV => "Certificate IV",
            Self::Diploma => "Diploma or Advanced Diploma",
            Self::Degree => "Bachelor degree or higher",
        }
    }
}

impl FromStr for QualificationLevel {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|level| level.code() == normalized)
            .ok_or_else(|| UnknownCode::new("qualification level", value))
    }
}

/// Ceiling on the qualification an applicant may already hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualificationCeiling {
    None,
    BelowCertIv,
    BelowDiploma,
    Any,
}

impl QualificationCeiling {
    /// Lowest qualification ordinal that disqualifies; `None` never disqualifies.
    pub const fn disqualifying_ordinal(self) -> Option<u8> {
        match self {
            Self::None => Some(1),
            Self::BelowCertIv => Some(3),
            Self::BelowDiploma => Some(4),
            Self::Any => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BelowCertIv => "below-cert-iv",
            Self::BelowDiploma => "below-diploma",
            Self::Any => "any",
        }
    }

    pub fn admits(self, level: QualificationLevel) -> bool {
        match self.disqualifying_ordinal() {
            Some(threshold) => level.ordinal() < threshold,
            None => true,
        }
    }
}

impl FromStr for QualificationCeiling {
    type Err = UnknownCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "below-cert-iv" => Ok(Self::BelowCertIv),
            "below-diploma" => Ok(Self::BelowDiploma),
            "any" => Ok(Self::Any),
            _ => Err(UnknownCode::new("qualification ceiling", value)),
        }
    }
}

/// Raised when a code string does not name a known enum member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownCode {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Inclusive whole-dollar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(amount: u32) -> Self {
        Self {
            min: amount,
            max: amount,
        }
    }

    pub const fn free() -> Self {
        Self::fixed(0)
    }

    pub const fn is_free(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

/// Structured eligibility rules attached to a single program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u8>,
    #[serde(default)]
    pub residency_required: bool,
    #[serde(default)]
    pub citizenship_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<Vec<EmploymentStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_qualification_level: Option<QualificationCeiling>,
    /// Informational only; never evaluated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_requirements: Vec<String>,
}

impl EligibilityCriteria {
    /// Allowed employment statuses, or `None` when the program does not constrain them.
    pub fn employment_constraint(&self) -> Option<&[EmploymentStatus]> {
        self.employment_status
            .as_deref()
            .filter(|allowed| !allowed.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingProgram {
    pub id: String,
    pub name: String,
    pub jurisdiction: Jurisdiction,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_contribution: Option<CostRange>,
    pub eligibility: EligibilityCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Raw calculator input as submitted by a form or API client.
///
/// Every field is optional on the wire so that a missing required value surfaces as a
/// [`ContractViolation`](super::ContractViolation) instead of an opaque decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingCalculatorInput {
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default, rename = "isCitizenOrPR")]
    pub is_citizen_or_pr: Option<bool>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub employment_status: Option<EmploymentStatus>,
    #[serde(default)]
    pub prior_qualification: Option<QualificationLevel>,
    #[serde(default)]
    pub course_fee: Option<u32>,
}

/// Validated applicant; the evaluator and calculator only ever see this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub jurisdiction: Jurisdiction,
    #[serde(rename = "isCitizenOrPR")]
    pub is_citizen_or_pr: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_qualification: Option<QualificationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_fee: Option<u32>,
}

impl Applicant {
    pub fn new(jurisdiction: Jurisdiction, is_citizen_or_pr: bool) -> Self {
        Self {
            jurisdiction,
            is_citizen_or_pr,
            age: None,
            employment_status: None,
            prior_qualification: None,
            course_fee: None,
        }
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_employment_status(mut self, status: EmploymentStatus) -> Self {
        self.employment_status = Some(status);
        self
    }

    pub fn with_prior_qualification(mut self, level: QualificationLevel) -> Self {
        self.prior_qualification = Some(level);
        self
    }

    pub fn with_course_fee(mut self, fee: u32) -> Self {
        self.course_fee = Some(fee);
        self
    }
}

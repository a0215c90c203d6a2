//! Vocational training funding eligibility: program catalog, rule evaluation, and cost
//! aggregation across a jurisdiction.

pub mod calculator;
pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod format;
pub(crate) mod intake;
pub mod router;
pub mod service;
mod summary;

#[cfg(test)]
mod tests;

pub use calculator::{calculate, CalculationResult, IneligibleProgram};
pub use catalog::{CatalogError, CatalogImportError, CatalogLoader, ProgramCatalog};
pub use domain::{
    Applicant, CostRange, EligibilityCriteria, EmploymentStatus, FundingCalculatorInput,
    FundingProgram, Jurisdiction, QualificationCeiling, QualificationLevel, UnknownCode,
};
pub use evaluation::{evaluate, IneligibilityReason, Verdict};
pub use format::{format_cost_range, format_currency};
pub use intake::ContractViolation;
pub use router::funding_router;
pub use service::{FundingService, FundingServiceError};
pub use summary::{EligibleProgramView, FundingSummary, IneligibleProgramView};

use std::sync::Arc;

use super::calculator::{calculate, CalculationResult};
use super::catalog::ProgramCatalog;
use super::domain::{Applicant, FundingCalculatorInput, FundingProgram, Jurisdiction};
use super::evaluation::{evaluate, Verdict};
use super::intake::ContractViolation;

/// Facade pairing the shared read-only catalog with the evaluator and calculator.
#[derive(Debug, Clone)]
pub struct FundingService {
    catalog: Arc<ProgramCatalog>,
}

impl FundingService {
    pub fn new(catalog: Arc<ProgramCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    /// Validate raw input and run the calculation against the whole catalog.
    pub fn calculate(
        &self,
        input: FundingCalculatorInput,
    ) -> Result<CalculationResult, FundingServiceError> {
        let applicant = Applicant::try_from(input)?;
        Ok(self.calculate_for(&applicant))
    }

    pub fn calculate_for(&self, applicant: &Applicant) -> CalculationResult {
        calculate(applicant, self.catalog.programs())
    }

    /// Evaluate a single program by id.
    pub fn evaluate(
        &self,
        program_id: &str,
        input: FundingCalculatorInput,
    ) -> Result<Verdict, FundingServiceError> {
        let applicant = Applicant::try_from(input)?;
        let program = self
            .catalog
            .get(program_id)
            .ok_or_else(|| FundingServiceError::UnknownProgram(program_id.to_string()))?;
        Ok(evaluate(program, &applicant)?)
    }

    /// Programs in catalog order, optionally restricted to one jurisdiction.
    pub fn programs(&self, jurisdiction: Option<Jurisdiction>) -> Vec<FundingProgram> {
        self.catalog
            .programs()
            .iter()
            .filter(|program| jurisdiction.map_or(true, |code| program.jurisdiction == code))
            .cloned()
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FundingServiceError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error("unknown funding program '{0}'")]
    UnknownProgram(String),
}

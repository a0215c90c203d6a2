mod loader;
mod standard;

pub use loader::{CatalogImportError, CatalogLoader};

use std::collections::{BTreeSet, HashSet};

use super::domain::{FundingProgram, Jurisdiction};

/// Validation failures raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate program id '{0}'")]
    DuplicateProgramId(String),
    #[error("program '{id}' has student contribution min {min} above max {max}")]
    InvertedContribution { id: String, min: u32, max: u32 },
    #[error("program '{id}' has minimum age {min_age} above maximum age {max_age}")]
    InvertedAgeBounds { id: String, min_age: u8, max_age: u8 },
}

/// Ordered, read-only collection of funding programs across all jurisdictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramCatalog {
    programs: Vec<FundingProgram>,
}

impl ProgramCatalog {
    pub fn new(programs: Vec<FundingProgram>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for program in &programs {
            if !seen.insert(program.id.as_str()) {
                return Err(CatalogError::DuplicateProgramId(program.id.clone()));
            }

            if let Some(contribution) = program.student_contribution {
                if contribution.min > contribution.max {
                    return Err(CatalogError::InvertedContribution {
                        id: program.id.clone(),
                        min: contribution.min,
                        max: contribution.max,
                    });
                }
            }

            let criteria = &program.eligibility;
            if let (Some(min_age), Some(max_age)) = (criteria.min_age, criteria.max_age) {
                if min_age > max_age {
                    return Err(CatalogError::InvertedAgeBounds {
                        id: program.id.clone(),
                        min_age,
                        max_age,
                    });
                }
            }
        }

        Ok(Self { programs })
    }

    /// Reference catalog covering every state and territory.
    pub fn standard() -> Self {
        Self {
            programs: standard::standard_programs(),
        }
    }

    pub fn programs(&self) -> &[FundingProgram] {
        &self.programs
    }

    pub fn get(&self, id: &str) -> Option<&FundingProgram> {
        self.programs.iter().find(|program| program.id == id)
    }

    pub fn for_jurisdiction(&self, jurisdiction: Jurisdiction) -> Vec<&FundingProgram> {
        self.programs
            .iter()
            .filter(|program| program.jurisdiction == jurisdiction)
            .collect()
    }

    pub fn jurisdictions(&self) -> BTreeSet<Jurisdiction> {
        self.programs
            .iter()
            .map(|program| program.jurisdiction)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

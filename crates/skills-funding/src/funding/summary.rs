use serde::Serialize;

use super::calculator::CalculationResult;
use super::format::{format_cost_range, format_currency};

const UNKNOWN_CONTRIBUTION_LABEL: &str = "Contact provider";

#[derive(Debug, Clone, Serialize)]
pub struct EligibleProgramView {
    pub id: String,
    pub name: String,
    pub contribution_label: String,
    pub is_primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IneligibleProgramView {
    pub id: String,
    pub name: String,
    pub reason: String,
}

/// Display-ready rendering of a [`CalculationResult`].
#[derive(Debug, Clone, Serialize)]
pub struct FundingSummary {
    pub jurisdiction_label: &'static str,
    pub headline: String,
    pub eligible: Vec<EligibleProgramView>,
    pub ineligible: Vec<IneligibleProgramView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_fee_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_saving_label: Option<String>,
}

impl CalculationResult {
    pub fn summary(&self) -> FundingSummary {
        let eligible = self
            .eligible_programs
            .iter()
            .map(|program| EligibleProgramView {
                id: program.id.clone(),
                name: program.name.clone(),
                contribution_label: program
                    .student_contribution
                    .as_ref()
                    .map(format_cost_range)
                    .unwrap_or_else(|| UNKNOWN_CONTRIBUTION_LABEL.to_string()),
                is_primary: program.is_primary,
                info_url: program.info_url.clone(),
            })
            .collect();

        let ineligible = self
            .ineligible_programs
            .iter()
            .map(|entry| IneligibleProgramView {
                id: entry.program.id.clone(),
                name: entry.program.name.clone(),
                reason: entry.reason.clone(),
            })
            .collect();

        let potential_saving = match (self.full_fee, self.estimated_cost) {
            (Some(full_fee), Some(estimate)) => full_fee
                .min
                .checked_sub(estimate.min)
                .filter(|saving| *saving > 0),
            _ => None,
        };

        FundingSummary {
            jurisdiction_label: self.jurisdiction.label(),
            headline: self.headline(),
            eligible,
            ineligible,
            estimated_cost_label: self.estimated_cost.as_ref().map(format_cost_range),
            full_fee_label: self.full_fee.as_ref().map(format_cost_range),
            potential_saving_label: potential_saving.map(format_currency),
        }
    }

    fn headline(&self) -> String {
        let count = self.eligible_programs.len();
        match (count, self.estimated_cost.as_ref()) {
            (0, _) => format!(
                "You may not qualify for a {} subsidy, but you can still enrol at full fee.",
                self.jurisdiction.label()
            ),
            (_, Some(estimate)) => format!(
                "You may be eligible for {count} funding program{}; estimated cost {}.",
                if count == 1 { "" } else { "s" },
                format_cost_range(estimate)
            ),
            (_, None) => format!(
                "You may be eligible for {count} funding program{}; contact a provider for fees.",
                if count == 1 { "" } else { "s" }
            ),
        }
    }
}

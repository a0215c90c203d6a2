use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::super::domain::{
    CostRange, EligibilityCriteria, EmploymentStatus, FundingProgram, Jurisdiction,
    QualificationCeiling,
};
use super::{CatalogError, ProgramCatalog};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: invalid {field} '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unsupported catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Imports catalogs supplied as JSON arrays or flat CSV exports.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ProgramCatalog, CatalogImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            other => return Err(CatalogImportError::UnsupportedFormat(other.to_string())),
        };

        info!(
            path = %path.display(),
            programs = catalog.len(),
            "funding catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<ProgramCatalog, CatalogImportError> {
        let programs: Vec<FundingProgram> = serde_json::from_reader(reader)?;
        Ok(ProgramCatalog::new(programs)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<ProgramCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut programs = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            programs.push(row.into_program(index + 1)?);
        }

        Ok(ProgramCatalog::new(programs)?)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    jurisdiction: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contribution_min: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contribution_max: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    min_age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    residency_required: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    citizenship_required: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    employment_status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    prior_qualification_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    additional_requirements: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    info_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_primary: Option<String>,
}

impl CatalogRow {
    fn into_program(self, row: usize) -> Result<FundingProgram, CatalogImportError> {
        let jurisdiction = parse_field::<Jurisdiction>(row, "jurisdiction", &self.jurisdiction)?;

        let student_contribution = match (&self.contribution_min, &self.contribution_max) {
            (Some(min), Some(max)) => Some(CostRange::new(
                parse_field(row, "contribution_min", min)?,
                parse_field(row, "contribution_max", max)?,
            )),
            (None, None) => None,
            (Some(value), None) | (None, Some(value)) => {
                return Err(CatalogImportError::InvalidField {
                    row,
                    field: "student contribution",
                    value: value.clone(),
                })
            }
        };

        let employment_status = self
            .employment_status
            .as_deref()
            .map(|raw| {
                split_list(raw)
                    .map(|value| parse_field::<EmploymentStatus>(row, "employment_status", value))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let eligibility = EligibilityCriteria {
            min_age: parse_optional(row, "min_age", self.min_age.as_deref())?,
            max_age: parse_optional(row, "max_age", self.max_age.as_deref())?,
            residency_required: parse_flag(
                row,
                "residency_required",
                self.residency_required.as_deref(),
            )?,
            citizenship_required: parse_flag(
                row,
                "citizenship_required",
                self.citizenship_required.as_deref(),
            )?,
            employment_status,
            prior_qualification_level: parse_optional::<QualificationCeiling>(
                row,
                "prior_qualification_level",
                self.prior_qualification_level.as_deref(),
            )?,
            additional_requirements: self
                .additional_requirements
                .as_deref()
                .map(|raw| split_list(raw).map(str::to_string).collect())
                .unwrap_or_default(),
        };

        Ok(FundingProgram {
            id: self.id,
            name: self.name,
            jurisdiction,
            description: self.description,
            student_contribution,
            eligibility,
            info_url: self.info_url,
            is_primary: parse_flag(row, "is_primary", self.is_primary.as_deref())?,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_field<T: FromStr>(
    row: usize,
    field: &'static str,
    value: &str,
) -> Result<T, CatalogImportError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| CatalogImportError::InvalidField {
            row,
            field,
            value: value.to_string(),
        })
}

fn parse_optional<T: FromStr>(
    row: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, CatalogImportError> {
    value
        .map(|value| parse_field(row, field, value))
        .transpose()
}

fn parse_flag(
    row: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<bool, CatalogImportError> {
    match value.map(|value| value.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(flag) => match flag.as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" => Ok(false),
            _ => Err(CatalogImportError::InvalidField {
                row,
                field,
                value: flag,
            }),
        },
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

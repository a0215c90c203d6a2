use crate::infra::{load_catalog, parse_employment_status, parse_jurisdiction, parse_qualification};
use clap::Args;
use serde::Serialize;
use skills_funding::config::AppConfig;
use skills_funding::error::AppError;
use skills_funding::funding::{
    format_cost_range, Applicant, CalculationResult, EmploymentStatus, FundingProgram,
    FundingService, FundingSummary, Jurisdiction, QualificationLevel,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// State or territory code (nsw, vic, qld, wa, sa, tas, act, nt)
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) jurisdiction: Jurisdiction,
    /// Applicant is an Australian citizen or permanent resident
    #[arg(long)]
    pub(crate) citizen: bool,
    /// Applicant age in whole years
    #[arg(long)]
    pub(crate) age: Option<u8>,
    /// employed, unemployed or seeking
    #[arg(long, value_parser = parse_employment_status)]
    pub(crate) employment: Option<EmploymentStatus>,
    /// Highest qualification already held (none, cert-i-ii, cert-iii, cert-iv, diploma, degree)
    #[arg(long, value_parser = parse_qualification)]
    pub(crate) prior_qualification: Option<QualificationLevel>,
    /// Full course fee in whole dollars, used to report potential savings
    #[arg(long)]
    pub(crate) course_fee: Option<u32>,
    /// JSON or CSV catalog to use instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the raw calculation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProgramsArgs {
    /// Only list programs for this state or territory
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) jurisdiction: Option<Jurisdiction>,
    /// JSON or CSV catalog to use instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CalculationOutput<'a> {
    result: &'a CalculationResult,
    summary: &'a FundingSummary,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.catalog, args.catalog.as_deref())?;

    let mut applicant = Applicant::new(args.jurisdiction, args.citizen);
    applicant.age = args.age;
    applicant.employment_status = args.employment;
    applicant.prior_qualification = args.prior_qualification;
    applicant.course_fee = args.course_fee;

    let service = FundingService::new(Arc::new(catalog));
    let result = service.calculate_for(&applicant);
    let summary = result.summary();

    if args.json {
        let output = CalculationOutput {
            result: &result,
            summary: &summary,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialise calculation: {err}"),
        }
    } else {
        print!("{}", render_calculation(&result, &summary));
    }

    Ok(())
}

pub(crate) fn run_programs(args: ProgramsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.catalog, args.catalog.as_deref())?;
    let service = FundingService::new(Arc::new(catalog));

    print!("{}", render_programs(&service.programs(args.jurisdiction)));
    Ok(())
}

pub(crate) fn render_calculation(result: &CalculationResult, summary: &FundingSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Funding check: {}", summary.jurisdiction_label);
    let _ = writeln!(out, "{}", summary.headline);

    if summary.eligible.is_empty() {
        let _ = writeln!(out, "\nEligible programs: none");
    } else {
        let _ = writeln!(out, "\nEligible programs");
        for program in &summary.eligible {
            let marker = if program.is_primary { "*" } else { "-" };
            let _ = writeln!(
                out,
                "{marker} {} ({}): {}",
                program.name, program.id, program.contribution_label
            );
        }
    }

    if !summary.ineligible.is_empty() {
        let _ = writeln!(out, "\nNot eligible");
        for program in &summary.ineligible {
            let _ = writeln!(out, "- {} ({}): {}", program.name, program.id, program.reason);
        }
    }

    if let Some(best) = result.best_program() {
        let _ = writeln!(out, "\nBest option: {}", best.name);
    }
    if let Some(fee) = &summary.full_fee_label {
        let _ = writeln!(out, "Full fee: {fee}");
    }
    if let Some(saving) = &summary.potential_saving_label {
        let _ = writeln!(out, "Potential saving: up to {saving}");
    }

    out
}

pub(crate) fn render_programs(programs: &[FundingProgram]) -> String {
    if programs.is_empty() {
        return "No funding programs found.\n".to_string();
    }

    let mut out = String::new();
    let mut current = None;
    for program in programs {
        if current != Some(program.jurisdiction) {
            let _ = writeln!(
                out,
                "{}{}",
                if current.is_some() { "\n" } else { "" },
                program.jurisdiction.label()
            );
            current = Some(program.jurisdiction);
        }

        let cost = program
            .student_contribution
            .as_ref()
            .map(format_cost_range)
            .unwrap_or_else(|| "Contact provider".to_string());
        let _ = writeln!(out, "- {} [{}]: {}", program.name, program.id, cost);
    }

    out
}

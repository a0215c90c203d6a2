//! End-to-end scenarios for the funding calculator driven through the public API only.

use std::sync::Arc;

use skills_funding::funding::{
    calculate, evaluate, format_cost_range, format_currency, Applicant, CostRange,
    EmploymentStatus, FundingCalculatorInput, FundingService, FundingServiceError, Jurisdiction,
    ProgramCatalog, QualificationLevel,
};

fn standard_service() -> FundingService {
    FundingService::new(Arc::new(ProgramCatalog::standard()))
}

#[test]
fn unemployed_young_citizen_in_nsw_studies_for_free() {
    let catalog = ProgramCatalog::standard();
    let applicant = Applicant::new(Jurisdiction::Nsw, true)
        .with_age(20)
        .with_employment_status(EmploymentStatus::Unemployed)
        .with_prior_qualification(QualificationLevel::None)
        .with_course_fee(6200);

    let result = calculate(&applicant, catalog.programs());

    let eligible: Vec<&str> = result
        .eligible_programs
        .iter()
        .map(|program| program.id.as_str())
        .collect();
    assert!(eligible.contains(&"nsw-fee-free-young-people"));
    assert!(eligible.contains(&"nsw-smart-and-skilled"));
    assert_eq!(result.estimated_cost, Some(CostRange::free()));
    assert_eq!(result.full_fee, Some(CostRange::fixed(6200)));
    assert!(result
        .eligible_programs
        .iter()
        .all(|program| program.jurisdiction == Jurisdiction::Nsw));

    let summary = result.summary();
    assert_eq!(summary.estimated_cost_label.as_deref(), Some("Free"));
    assert_eq!(summary.potential_saving_label.as_deref(), Some("$6,200"));
}

#[test]
fn non_citizen_in_nsw_is_offered_full_fee_only() {
    let catalog = ProgramCatalog::standard();
    let applicant = Applicant::new(Jurisdiction::Nsw, false).with_age(30);

    let result = calculate(&applicant, catalog.programs());

    assert!(result.eligible_programs.is_empty());
    assert_eq!(
        result.ineligible_programs.len(),
        catalog.for_jurisdiction(Jurisdiction::Nsw).len()
    );
    assert!(result
        .ineligible_programs
        .iter()
        .all(|entry| entry.reason.contains("citizenship")));
    assert!(result.summary().headline.contains("full fee"));
}

#[test]
fn northern_territory_program_without_fee_is_eligible_but_unpriced() {
    let catalog = ProgramCatalog::standard();
    let applicant = Applicant::new(Jurisdiction::Nt, false);

    let result = calculate(&applicant, catalog.programs());

    assert_eq!(result.eligible_programs.len(), 1);
    assert!(result.estimated_cost.is_none());
    assert_eq!(result.summary().eligible[0].contribution_label, "Contact provider");
}

#[test]
fn diploma_holder_is_excluded_from_capped_programs() {
    let catalog = ProgramCatalog::standard();
    let applicant = Applicant::new(Jurisdiction::Vic, true)
        .with_prior_qualification(QualificationLevel::Diploma);

    let result = calculate(&applicant, catalog.programs());

    assert!(result.eligible_programs.is_empty());
    assert!(result
        .ineligible_programs
        .iter()
        .all(|entry| entry.reason == "Qualification level too high for this program."));
}

#[test]
fn single_program_evaluation_matches_calculation() {
    let catalog = ProgramCatalog::standard();
    let applicant = Applicant::new(Jurisdiction::Qld, true).with_age(14);
    let result = calculate(&applicant, catalog.programs());

    for entry in &result.ineligible_programs {
        let verdict = evaluate(&entry.program, &applicant).expect("same jurisdiction");
        assert_eq!(verdict.reason().as_deref(), Some(entry.reason.as_str()));
    }
    for program in &result.eligible_programs {
        assert!(evaluate(program, &applicant)
            .expect("same jurisdiction")
            .is_eligible());
    }
}

#[test]
fn service_rejects_input_without_jurisdiction() {
    let service = standard_service();
    let input = FundingCalculatorInput {
        is_citizen_or_pr: Some(true),
        ..FundingCalculatorInput::default()
    };

    let error = service.calculate(input).expect_err("missing jurisdiction");

    assert!(matches!(error, FundingServiceError::Contract(_)));
}

#[test]
fn service_lists_programs_per_jurisdiction() {
    let service = standard_service();

    let qld = service.programs(Some(Jurisdiction::Qld));
    let all = service.programs(None);

    assert!(qld.iter().all(|program| program.jurisdiction == Jurisdiction::Qld));
    assert_eq!(all.len(), service.catalog().len());
}

#[test]
fn formatters_produce_exact_strings() {
    assert_eq!(format_cost_range(&CostRange::new(0, 0)), "Free");
    assert_eq!(format_cost_range(&CostRange::new(0, 2400)), "Free - $2,400");
    assert_eq!(format_currency(10000), "$10,000");
}

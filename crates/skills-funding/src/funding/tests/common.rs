use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::funding::catalog::ProgramCatalog;
use crate::funding::domain::{
    Applicant, CostRange, EligibilityCriteria, EmploymentStatus, FundingCalculatorInput,
    FundingProgram, Jurisdiction, QualificationCeiling, QualificationLevel,
};
use crate::funding::{funding_router, FundingService};

pub(super) fn program(
    id: &str,
    jurisdiction: Jurisdiction,
    contribution: Option<CostRange>,
    eligibility: EligibilityCriteria,
) -> FundingProgram {
    FundingProgram {
        id: id.to_string(),
        name: format!("Program {id}"),
        jurisdiction,
        description: "Subsidised vocational training".to_string(),
        student_contribution: contribution,
        eligibility,
        info_url: None,
        is_primary: false,
    }
}

pub(super) fn citizenship_gated() -> EligibilityCriteria {
    EligibilityCriteria {
        residency_required: true,
        citizenship_required: true,
        ..EligibilityCriteria::default()
    }
}

pub(super) fn youth_unemployed_criteria() -> EligibilityCriteria {
    EligibilityCriteria {
        min_age: Some(17),
        max_age: Some(24),
        residency_required: true,
        citizenship_required: true,
        employment_status: Some(vec![EmploymentStatus::Unemployed, EmploymentStatus::Seeking]),
        prior_qualification_level: Some(QualificationCeiling::BelowCertIv),
        additional_requirements: vec!["Not enrolled at school".to_string()],
    }
}

/// Realistic NSW catalog with a Victorian entry mixed in.
pub(super) fn nsw_catalog() -> Vec<FundingProgram> {
    vec![
        program(
            "nsw-smart-and-skilled",
            Jurisdiction::Nsw,
            Some(CostRange::new(500, 2400)),
            EligibilityCriteria {
                min_age: Some(15),
                prior_qualification_level: Some(QualificationCeiling::BelowDiploma),
                ..citizenship_gated()
            },
        ),
        program(
            "nsw-youth-fee-free",
            Jurisdiction::Nsw,
            Some(CostRange::free()),
            youth_unemployed_criteria(),
        ),
        program(
            "vic-skills-first",
            Jurisdiction::Vic,
            Some(CostRange::new(0, 3000)),
            citizenship_gated(),
        ),
        program(
            "nsw-employer-traineeship",
            Jurisdiction::Nsw,
            None,
            EligibilityCriteria {
                employment_status: Some(vec![EmploymentStatus::Employed]),
                ..EligibilityCriteria::default()
            },
        ),
    ]
}

pub(super) fn young_jobseeker() -> Applicant {
    Applicant::new(Jurisdiction::Nsw, true)
        .with_age(20)
        .with_employment_status(EmploymentStatus::Unemployed)
        .with_prior_qualification(QualificationLevel::None)
}

pub(super) fn young_jobseeker_input() -> FundingCalculatorInput {
    FundingCalculatorInput {
        jurisdiction: Some("nsw".to_string()),
        is_citizen_or_pr: Some(true),
        age: Some(20),
        employment_status: Some(EmploymentStatus::Unemployed),
        prior_qualification: Some(QualificationLevel::None),
        course_fee: Some(4800),
    }
}

pub(super) fn build_service() -> FundingService {
    let catalog = ProgramCatalog::new(nsw_catalog()).expect("fixture catalog valid");
    FundingService::new(Arc::new(catalog))
}

pub(super) fn funding_router_with_service(service: FundingService) -> axum::Router {
    funding_router(Arc::new(service))
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

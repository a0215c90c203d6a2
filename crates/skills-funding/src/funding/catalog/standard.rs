use super::super::domain::{
    CostRange, EligibilityCriteria, EmploymentStatus, FundingProgram, Jurisdiction,
    QualificationCeiling,
};

pub(super) fn standard_programs() -> Vec<FundingProgram> {
    vec![
        FundingProgram {
            id: "nsw-fee-free-tafe".to_string(),
            name: "Fee-Free TAFE NSW".to_string(),
            jurisdiction: Jurisdiction::Nsw,
            description: "Tuition-free places in priority qualifications delivered by TAFE NSW and approved providers.".to_string(),
            student_contribution: Some(CostRange::free()),
            eligibility: EligibilityCriteria {
                min_age: Some(15),
                residency_required: true,
                citizenship_required: true,
                additional_requirements: vec![
                    "Must live or work in NSW".to_string(),
                    "No longer at school".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://education.nsw.gov.au/skills-nsw/students-and-jobseekers/fee-free".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "nsw-smart-and-skilled".to_string(),
            name: "Smart and Skilled".to_string(),
            jurisdiction: Jurisdiction::Nsw,
            description: "Government-subsidised training up to Certificate IV, with capped student fees for eligible learners.".to_string(),
            student_contribution: Some(CostRange::new(0, 2400)),
            eligibility: EligibilityCriteria {
                min_age: Some(15),
                residency_required: true,
                citizenship_required: true,
                prior_qualification_level: Some(QualificationCeiling::BelowDiploma),
                additional_requirements: vec!["Must live or work in NSW".to_string()],
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://smartandskilled.nsw.gov.au".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "nsw-fee-free-young-people".to_string(),
            name: "Fee-Free Training for Young People".to_string(),
            jurisdiction: Jurisdiction::Nsw,
            description: "Free entry-level training for young people who are not working, to build job-ready skills.".to_string(),
            student_contribution: Some(CostRange::free()),
            eligibility: EligibilityCriteria {
                min_age: Some(17),
                max_age: Some(24),
                residency_required: true,
                citizenship_required: true,
                employment_status: Some(vec![
                    EmploymentStatus::Unemployed,
                    EmploymentStatus::Seeking,
                ]),
                prior_qualification_level: Some(QualificationCeiling::BelowCertIv),
                ..EligibilityCriteria::default()
            },
            info_url: None,
            is_primary: false,
        },
        FundingProgram {
            id: "vic-skills-first".to_string(),
            name: "Skills First".to_string(),
            jurisdiction: Jurisdiction::Vic,
            description: "Victorian Government subsidised training for accredited courses at TAFE and registered providers.".to_string(),
            student_contribution: Some(CostRange::new(0, 3000)),
            eligibility: EligibilityCriteria {
                residency_required: true,
                citizenship_required: true,
                prior_qualification_level: Some(QualificationCeiling::BelowDiploma),
                additional_requirements: vec![
                    "Limited number of subsidised enrolments per year".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://www.vic.gov.au/skills-first".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "vic-free-tafe".to_string(),
            name: "Free TAFE".to_string(),
            jurisdiction: Jurisdiction::Vic,
            description: "Tuition-free priority courses at Victorian TAFEs.".to_string(),
            student_contribution: Some(CostRange::free()),
            eligibility: EligibilityCriteria {
                residency_required: true,
                citizenship_required: true,
                prior_qualification_level: Some(QualificationCeiling::BelowDiploma),
                additional_requirements: vec![
                    "Materials fees may still apply".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://www.vic.gov.au/free-tafe".to_string()),
            is_primary: false,
        },
        FundingProgram {
            id: "qld-certificate-3-guarantee".to_string(),
            name: "Certificate 3 Guarantee".to_string(),
            jurisdiction: Jurisdiction::Qld,
            description: "Subsidised training for a first post-school Certificate III.".to_string(),
            student_contribution: Some(CostRange::new(0, 1500)),
            eligibility: EligibilityCriteria {
                min_age: Some(15),
                residency_required: true,
                citizenship_required: true,
                prior_qualification_level: Some(QualificationCeiling::BelowCertIv),
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://desbt.qld.gov.au/training/training-careers/incentives/certificate3".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "qld-higher-level-skills".to_string(),
            name: "Higher Level Skills".to_string(),
            jurisdiction: Jurisdiction::Qld,
            description: "Subsidised Certificate IV and Diploma level training in priority industries.".to_string(),
            student_contribution: Some(CostRange::new(500, 3500)),
            eligibility: EligibilityCriteria {
                min_age: Some(15),
                residency_required: true,
                citizenship_required: true,
                prior_qualification_level: Some(QualificationCeiling::BelowDiploma),
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://desbt.qld.gov.au/training/training-careers/incentives/highlevelskills".to_string()),
            is_primary: false,
        },
        FundingProgram {
            id: "wa-lower-fees-local-skills".to_string(),
            name: "Lower fees, local skills".to_string(),
            jurisdiction: Jurisdiction::Wa,
            description: "Reduced course fees for high-demand qualifications at WA TAFE colleges.".to_string(),
            student_contribution: Some(CostRange::new(0, 1200)),
            eligibility: EligibilityCriteria {
                residency_required: true,
                citizenship_required: true,
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://www.jobsandskills.wa.gov.au".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "sa-subsidised-training".to_string(),
            name: "Subsidised Training".to_string(),
            jurisdiction: Jurisdiction::Sa,
            description: "South Australian Government subsidy for courses on the Subsidised Training List.".to_string(),
            student_contribution: Some(CostRange::new(0, 2500)),
            eligibility: EligibilityCriteria {
                min_age: Some(16),
                residency_required: true,
                citizenship_required: true,
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://skills.sa.gov.au".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "tas-skills-fund".to_string(),
            name: "Skills Tasmania Funded Training".to_string(),
            jurisdiction: Jurisdiction::Tas,
            description: "Tasmanian subsidised training through TasTAFE and endorsed providers.".to_string(),
            student_contribution: Some(CostRange::new(0, 2000)),
            eligibility: EligibilityCriteria {
                residency_required: true,
                citizenship_required: true,
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://www.skills.tas.gov.au".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "act-skilled-capital".to_string(),
            name: "Skilled Capital".to_string(),
            jurisdiction: Jurisdiction::Act,
            description: "ACT subsidised training in skills-shortage qualifications.".to_string(),
            student_contribution: Some(CostRange::new(0, 2200)),
            eligibility: EligibilityCriteria {
                min_age: Some(15),
                residency_required: true,
                citizenship_required: true,
                employment_status: Some(Vec::new()),
                ..EligibilityCriteria::default()
            },
            info_url: Some("https://www.act.gov.au/skills".to_string()),
            is_primary: true,
        },
        FundingProgram {
            id: "nt-vet-funding".to_string(),
            name: "NT Government Funded Training".to_string(),
            jurisdiction: Jurisdiction::Nt,
            description: "Northern Territory subsidies for accredited vocational training.".to_string(),
            student_contribution: None,
            eligibility: EligibilityCriteria {
                residency_required: true,
                citizenship_required: false,
                additional_requirements: vec![
                    "Contact the provider for current fees".to_string(),
                ],
                ..EligibilityCriteria::default()
            },
            info_url: None,
            is_primary: true,
        },
    ]
}

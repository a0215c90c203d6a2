use metrics_exporter_prometheus::PrometheusHandle;
use skills_funding::config::CatalogConfig;
use skills_funding::funding::{
    CatalogImportError, CatalogLoader, EmploymentStatus, Jurisdiction, ProgramCatalog,
    QualificationLevel,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog named by `override_path`, then the configured path, then the standard one.
pub(crate) fn load_catalog(
    config: &CatalogConfig,
    override_path: Option<&Path>,
) -> Result<ProgramCatalog, CatalogImportError> {
    match override_path.or(config.path.as_deref()) {
        Some(path) => CatalogLoader::from_path(path),
        None => {
            let catalog = ProgramCatalog::standard();
            info!(programs = catalog.len(), "using standard funding catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    raw.parse::<Jurisdiction>().map_err(|err| {
        let known: Vec<&str> = Jurisdiction::ordered()
            .iter()
            .map(|jurisdiction| jurisdiction.code())
            .collect();
        format!("{err} (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_employment_status(raw: &str) -> Result<EmploymentStatus, String> {
    raw.parse::<EmploymentStatus>()
        .map_err(|err| format!("{err} (expected employed, unemployed or seeking)"))
}

pub(crate) fn parse_qualification(raw: &str) -> Result<QualificationLevel, String> {
    raw.parse::<QualificationLevel>().map_err(|err| {
        let known: Vec<&str> = QualificationLevel::ordered()
            .iter()
            .map(|level| level.code())
            .collect();
        format!("{err} (expected one of {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_explain_accepted_values() {
        assert_eq!(parse_jurisdiction("Tas"), Ok(Jurisdiction::Tas));
        let error = parse_jurisdiction("nz").expect_err("unknown code");
        assert!(error.contains("nsw, vic, qld, wa, sa, tas, act, nt"));

        assert_eq!(
            parse_qualification("cert-iv"),
            Ok(QualificationLevel::CertIV)
        );
        assert!(parse_employment_status("retired").is_err());
    }

    #[test]
    fn falls_back_to_standard_catalog() {
        let catalog = load_catalog(&CatalogConfig::default(), None).expect("standard catalog");
        assert_eq!(catalog, ProgramCatalog::standard());
    }

    #[test]
    fn override_path_wins_over_config() {
        let config = CatalogConfig {
            path: Some("./configured.json".into()),
        };
        let error = load_catalog(&config, Some(Path::new("./override.toml")))
            .expect_err("unsupported override");
        assert!(matches!(error, CatalogImportError::UnsupportedFormat(ext) if ext == "toml"));
    }
}

use financial_risk_engine::{
    config::Settings,
    models::{FinancialProfile, FinancialSnapshot},
    risk::{RiskScoringEngine, VERSION},
    services::AssessmentService,
    utils::logging::init_logging,
    AppError,
};
use tracing::{error, info};

const USAGE: &str = "usage: risk-assess [--snapshot] <input.json>";

enum InputKind {
    Profile,
    Snapshot,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let settings = Settings::new()?;
    init_logging(&settings.logging)?;
    info!("Configuration loaded successfully");

    let (kind, path) = parse_args(std::env::args().skip(1))?;

    let engine = RiskScoringEngine::with_rules(settings.scoring.clone())?;
    let service = AssessmentService::new(engine);

    let raw = tokio::fs::read_to_string(&path).await?;
    let assessment = match kind {
        InputKind::Profile => {
            let profile: FinancialProfile = serde_json::from_str(&raw)?;
            service.assess_profile(&profile)?
        }
        InputKind::Snapshot => {
            let snapshot: FinancialSnapshot = serde_json::from_str(&raw)?;
            service.engine().assess(&snapshot)?
        }
    };

    let mut output = serde_json::to_value(&assessment)?;
    if let Some(fields) = output.as_object_mut() {
        fields.insert("risk_tier_label".to_string(), assessment.risk_tier.label().into());
        fields.insert("engine_version".to_string(), VERSION.into());
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(InputKind, String), AppError> {
    let mut kind = InputKind::Profile;
    let mut path = None;

    for arg in args {
        if arg == "--snapshot" {
            kind = InputKind::Snapshot;
        } else if arg == "-h" || arg == "--help" {
            return Err(AppError::ValidationError(USAGE.to_string()));
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return Err(AppError::ValidationError(format!("unexpected argument {}\n{}", arg, USAGE)));
        }
    }

    path.map(|p| (kind, p))
        .ok_or_else(|| AppError::ValidationError(USAGE.to_string()))
}

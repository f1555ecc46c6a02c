use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblio_catalog::shell::{run, Shell};
use biblio_catalog::{config, seed};

fn main() -> ExitCode {
    // Initialize tracing (stderr, stdout belongs to the menu)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biblio_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let mut config = config::Config::from_env();

    // --profile CLI argument overrides PROFILE
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--profile")
        && let Some(val) = args.get(pos + 1)
    {
        config.profile = val.clone();
    }

    let mut shell = Shell::from_config(&config);

    let policy = shell.catalog.policy();
    tracing::info!(
        "Starting catalog (profile={}, loan period={} days, fee={} {}/day)",
        config.profile,
        policy.loan_period_days,
        policy.late_fee_per_day,
        config.currency
    );

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(&mut shell.catalog) {
            Ok(count) => tracing::info!("Demo data seeded successfully ({} books).", count),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    let stdin = io::stdin();
    match run(&mut shell, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

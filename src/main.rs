use anyhow::{Context, Result, bail};
use jobboard_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    queries::jobs::{CanonicalPathQuery, GetJobByPathQuery},
    services::ApplicationServices,
};
use jobboard_core::config::AppConfig;
use jobboard_core::domain::{company::CompanyRepository, job::JobRepository};
use jobboard_core::infrastructure::{
    database,
    repositories::{PostgresCompanyRepository, PostgresJobRepository},
    time::SystemClock,
    util::{CompanyNameSlugGenerator, JobTitleSlugGenerator},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: jobboard_core <migrate | backfill-slugs | resolve <path> | canonical <job-id>>";

enum Command {
    Migrate,
    BackfillSlugs,
    Resolve(String),
    Canonical(i64),
}

impl Command {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let name = args.next().unwrap_or_default();
        let command = match name.as_str() {
            "migrate" => Command::Migrate,
            "backfill-slugs" => Command::BackfillSlugs,
            "resolve" => Command::Resolve(args.next().context(USAGE)?),
            "canonical" => {
                let raw = args.next().context(USAGE)?;
                let id = raw
                    .parse::<i64>()
                    .with_context(|| format!("invalid job id '{raw}'"))?;
                Command::Canonical(id)
            }
            _ => bail!(USAGE),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let command = Command::from_args(std::env::args().skip(1))?;
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;

    if let Command::Migrate = command {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
        return Ok(());
    }

    let job_repo: Arc<dyn JobRepository> = Arc::new(PostgresJobRepository::new(pool.clone()));
    let company_repo: Arc<dyn CompanyRepository> =
        Arc::new(PostgresCompanyRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let job_slugger: Arc<dyn SlugGenerator> = Arc::new(JobTitleSlugGenerator);
    let company_slugger: Arc<dyn SlugGenerator> = Arc::new(CompanyNameSlugGenerator);

    let services = ApplicationServices::new(
        Arc::clone(&job_repo),
        Arc::clone(&company_repo),
        Arc::clone(&clock),
        Arc::clone(&job_slugger),
        Arc::clone(&company_slugger),
        config.slug_max_attempts(),
    );

    match command {
        Command::Migrate => {}
        Command::BackfillSlugs => {
            let report = services.job_commands.backfill_slugs().await?;
            for change in &report.changes {
                println!("Updated job {}: {} -> {}", change.job_id, change.from, change.to);
            }
            println!("Slug backfill complete. {} job(s) updated.", report.updated());
        }
        Command::Resolve(path) => {
            let page = services
                .job_queries
                .get_published_by_path(GetJobByPathQuery { path })
                .await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Canonical(id) => {
            let path = services
                .job_queries
                .canonical_path_for(CanonicalPathQuery { id })
                .await?;
            println!("{path}");
        }
    }

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

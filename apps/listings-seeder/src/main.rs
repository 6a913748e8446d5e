//! Offline seeding job: provisions the collection and vector index,
//! generates mock listings, and enriches them with generated copy and
//! embeddings.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_listings::{ListingRepository, ListingService, MongoListingRepository, OpenAiProvider};
use tracing::{info, warn};

mod config;
mod generator;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "listings-seeder", about = "Seed the listings database with mock data")]
struct Args {
    /// Number of mock listings to generate
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// Records enriched per batch (progress is logged after each batch)
    #[arg(long, default_value_t = 10)]
    batch_size: usize,

    /// Provision the collection and vector index, then exit
    #[arg(long)]
    init_only: bool,

    /// Skip vector index creation (for deployments without Atlas search)
    #[arg(long)]
    skip_index: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());
    let client = database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = client.database(config.mongodb.database());

    let repository = MongoListingRepository::new(db);
    repository.ensure_collection().await?;

    if args.skip_index {
        info!("Skipping vector index creation");
    } else if let Err(e) = repository.ensure_vector_index().await {
        // Search indexes need Atlas; local deployments can still seed
        warn!("Could not create vector index: {}", e);
    }

    if args.init_only {
        info!("Database initialized, exiting");
        return Ok(());
    }

    let llm = OpenAiProvider::new(config.openai.clone());
    let service = ListingService::new(repository, llm);

    info!("Generating {} mock listings", args.count);
    let records = generator::generate_records(args.count);

    let report = service.enrich_all(records, args.batch_size).await;
    info!(
        enriched = report.enriched,
        failed = report.failed,
        "Seeding complete"
    );

    if report.failed > 0 {
        return Err(eyre::eyre!(
            "{} of {} listings failed to enrich",
            report.failed,
            args.count
        ));
    }
    Ok(())
}

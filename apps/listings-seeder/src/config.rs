use core_config::{Environment, FromEnv};
use database::mongodb::MongoConfig;
use domain_listings::OpenAiConfig;

/// Seeder configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub openai: OpenAiConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            mongodb: MongoConfig::from_env()?,
            openai: OpenAiConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

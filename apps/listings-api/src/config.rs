use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_listings::{OpenAiConfig, service::SearchSettings};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub openai: OpenAiConfig,
    pub search: SearchSettings,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let openai = OpenAiConfig::from_env()?;
        let search = search_settings_from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            openai,
            search,
        })
    }
}

/// Load search tuning from `SEARCH_SCORE_THRESHOLD` and
/// `SEARCH_CANDIDATE_MULTIPLIER`, falling back to the domain defaults.
pub fn search_settings_from_env() -> Result<SearchSettings, ConfigError> {
    let defaults = SearchSettings::default();

    let score_threshold = env_or_default(
        "SEARCH_SCORE_THRESHOLD",
        &defaults.score_threshold.to_string(),
    )
    .parse()
    .map_err(|e| ConfigError::ParseError {
        key: "SEARCH_SCORE_THRESHOLD".to_string(),
        details: format!("{}", e),
    })?;

    let candidate_multiplier = env_or_default(
        "SEARCH_CANDIDATE_MULTIPLIER",
        &defaults.candidate_multiplier.to_string(),
    )
    .parse()
    .map_err(|e| ConfigError::ParseError {
        key: "SEARCH_CANDIDATE_MULTIPLIER".to_string(),
        details: format!("{}", e),
    })?;

    Ok(SearchSettings {
        score_threshold,
        candidate_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_settings_defaults() {
        temp_env::with_vars(
            [
                ("SEARCH_SCORE_THRESHOLD", None::<&str>),
                ("SEARCH_CANDIDATE_MULTIPLIER", None::<&str>),
            ],
            || {
                let settings = search_settings_from_env().unwrap();
                assert_eq!(settings.score_threshold, 0.7);
                assert_eq!(settings.candidate_multiplier, 10);
            },
        );
    }

    #[test]
    fn test_search_settings_overrides() {
        temp_env::with_vars(
            [
                ("SEARCH_SCORE_THRESHOLD", Some("0.55")),
                ("SEARCH_CANDIDATE_MULTIPLIER", Some("20")),
            ],
            || {
                let settings = search_settings_from_env().unwrap();
                assert_eq!(settings.score_threshold, 0.55);
                assert_eq!(settings.candidate_multiplier, 20);
            },
        );
    }

    #[test]
    fn test_search_settings_invalid_threshold() {
        temp_env::with_var("SEARCH_SCORE_THRESHOLD", Some("very high"), || {
            let result = search_settings_from_env();
            assert!(result.is_err());
        });
    }
}

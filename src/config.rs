//! Backend connection configuration.

use serde::Deserialize;

/// Connection settings for the remote document + file backend.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the backend REST API, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    /// Project identifier sent with every request.
    pub project_id: String,
    /// Server API key, if the deployment requires one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Database holding the post collection.
    pub database_id: String,
    /// Collection of post documents.
    #[serde(default = "default_collection_id")]
    pub collection_id: String,
    /// Bucket for uploaded media files.
    #[serde(default = "default_bucket_id")]
    pub bucket_id: String,
}

fn default_collection_id() -> String {
    "posts".to_string()
}

fn default_bucket_id() -> String {
    "media".to_string()
}

impl StoreConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources, later overriding earlier: `config/default`,
    /// `config/{RUN_MODE}`, then `BLOGSTORE__*` environment variables
    /// (e.g. `BLOGSTORE__PROJECT_ID`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is missing
    /// required fields.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BLOGSTORE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> StoreConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("config should build")
            .try_deserialize()
            .expect("config should deserialize")
    }

    #[test]
    fn test_defaults_applied() {
        let config = from_toml(
            r#"
            endpoint = "https://cloud.appwrite.io/v1"
            project_id = "blog"
            database_id = "main"
            "#,
        );

        assert_eq!(config.collection_id, "posts");
        assert_eq!(config.bucket_id, "media");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_explicit_values_win() {
        let config = from_toml(
            r#"
            endpoint = "https://backend.internal/v1"
            project_id = "blog"
            api_key = "secret"
            database_id = "main"
            collection_id = "articles"
            bucket_id = "covers"
            "#,
        );

        assert_eq!(config.collection_id, "articles");
        assert_eq!(config.bucket_id, "covers");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<StoreConfig, _> = config::Config::builder()
            .add_source(config::File::from_str(
                r#"endpoint = "https://backend.internal/v1""#,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("config should build")
            .try_deserialize();

        assert!(result.is_err());
    }
}

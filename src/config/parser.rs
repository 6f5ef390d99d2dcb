use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Used to tell whether the configuration changed between runs.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[catalog]
start-url = "https://books.toscrape.com/"

[crawler]
max-concurrent-fetches = 8
request-timeout-secs = 15

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"

[output]
store-path = "./books.json"
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.catalog.start_url, "https://books.toscrape.com/");
        assert_eq!(config.crawler.max_concurrent_fetches, Some(8));
        assert_eq!(config.crawler.request_timeout_secs, 15);
        assert_eq!(config.user_agent.crawler_name, "TestCrawler");
        assert_eq!(config.output.store_path, "./books.json");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config_content = r#"
[catalog]
start-url = "https://books.toscrape.com/"

[output]
store-path = "./books.json"
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_concurrent_fetches, None);
        assert_eq!(config.crawler.request_timeout_secs, 30);
        assert_eq!(config.user_agent.crawler_name, "shelfscrape");
    }

    #[test]
    fn test_missing_catalog_section_fails() {
        let config_content = r#"
[output]
store-path = "./books.json"
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_fails() {
        let file = create_temp_config("this is not toml [");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_hash_is_stable() {
        let config_content = r#"
[catalog]
start-url = "https://books.toscrape.com/"

[output]
store-path = "./books.json"
"#;
        let file = create_temp_config(config_content);

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_config_hash_changes_with_content() {
        let file1 = create_temp_config("[catalog]\nstart-url = \"https://a.example/\"");
        let file2 = create_temp_config("[catalog]\nstart-url = \"https://b.example/\"");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();
        assert_ne!(hash1, hash2);
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the hosted data platform.
    pub store_url: Option<String>,
    /// Anon key sent with every store request.
    pub store_anon_key: Option<String>,
}

pub fn load_config() -> AppConfig {
    let mut config = read_config_file();
    if let Ok(url) = std::env::var("HAVEN_STORE_URL") {
        config.store_url = Some(url);
    }
    if let Ok(key) = std::env::var("HAVEN_STORE_KEY") {
        config.store_anon_key = Some(key);
    }
    config
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

fn read_config_file() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("HAVEN_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("HAVEN_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Haven");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Haven");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("haven");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("haven");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".haven")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            store_url: Some("https://example.supabase.co".into()),
            store_anon_key: Some("anon-key".into()),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.store_url.as_deref(), Some("https://example.supabase.co"));
        assert_eq!(parsed.store_anon_key.as_deref(), Some("anon-key"));
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let parsed: AppConfig = toml::from_str("store_url = [not valid").unwrap_or_default();
        assert!(parsed.store_url.is_none());
        assert!(parsed.store_anon_key.is_none());
    }
}

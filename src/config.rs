use serde::Deserialize;
use std::env::var;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Public URL of the site, used to recognise absolute links back to it.
    pub site_url: Option<String>,
    pub site_title: String,
    pub navigation_data: PathBuf,
    /// Theme TOML; the built-in theme is used when unset.
    pub theme: Option<PathBuf>,
    pub public_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            site_url: None,
            site_title: String::from("Home"),
            navigation_data: PathBuf::from("data/navigation_data.json"),
            theme: None,
            public_dir: PathBuf::from("public"),
            out_dir: PathBuf::from("public_html"),
        }
    }
}

impl Config {
    /// Reads `path` if it exists, then applies `HOST`, `PORT` and `SITE_URL` from the environment.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let config = if path.exists() {
            tracing::debug!("Reading config from {}", path.display());
            Self::from_toml(&std::fs::read_to_string(path)?)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.with_overrides(|key| var(key).ok())
    }

    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|e| AppError::Other(format!("invalid PORT {port:?}: {e}")))?;
        }
        if let Some(site_url) = lookup("SITE_URL") {
            self.site_url = Some(site_url);
        }
        Ok(self)
    }

    pub fn origin(&self) -> Result<Option<Url>, AppError> {
        Ok(self.site_url.as_deref().map(Url::parse).transpose()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
port = 3000
site_url = "https://docs.example.com"
theme = "theme.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.theme, Some(PathBuf::from("theme.toml")));
        assert_eq!(config.navigation_data, PathBuf::from("data/navigation_data.json"));
        assert_eq!(
            config.origin().unwrap().unwrap().as_str(),
            "https://docs.example.com/"
        );
    }

    #[test]
    fn environment_overrides_file() {
        let env = HashMap::from([("HOST", "127.0.0.1"), ("PORT", "9000")]);
        let config = Config::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
        assert_eq!(config.site_url, None);
    }

    #[test]
    fn bad_port_is_rejected() {
        let result = Config::default().with_overrides(|key| (key == "PORT").then(|| String::from("http")));
        assert!(matches!(result, Err(AppError::Other(_))));
    }

    #[test]
    fn bad_site_url_is_a_parse_error() {
        let config = Config {
            site_url: Some(String::from("not a url")),
            ..Default::default()
        };
        assert!(matches!(config.origin(), Err(AppError::Parse(_))));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load(Path::new("/definitely/not/site.toml")).unwrap();
        assert_eq!(config.navigation_data, Config::default().navigation_data);
    }
}

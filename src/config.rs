use std::path::PathBuf;

use crate::errors::AppError;

pub const API_KEY_VAR: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PORT: u16 = 8080;

/// How long a built seed history may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedCachePolicy {
    /// Re-read the reference documents on every request.
    PerRequest,
    /// Keep the first fully loaded seed history until explicitly invalidated.
    PerProcess,
}

/// A reference dataset injected into every conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSource {
    pub path: PathBuf,
    /// Reporting period covered by the file, e.g. `H1 2025`.
    pub period: String,
}

/// Process configuration, built once at startup and handed to the services.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub reference_docs: Vec<ReferenceSource>,
    pub seed_cache: SeedCachePolicy,
    pub safety_settings: bool,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var(API_KEY_VAR).ok_or_else(|| AppError::missing_env(API_KEY_VAR))?;

        let data_dir = PathBuf::from(var("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()));
        let reference_docs = vec![
            ReferenceSource { path: data_dir.join("cge_hh_h12025.csv"), period: "H1 2025".to_string() },
            ReferenceSource { path: data_dir.join("cge_hh_h22024.csv"), period: "H2 2024".to_string() },
        ];

        let seed_cache = match var("SEED_CACHE").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("request") => SeedCachePolicy::PerRequest,
            Some("process") => SeedCachePolicy::PerProcess,
            Some(other) => {
                return Err(AppError::InvalidEnvVar {
                    name: "SEED_CACHE".to_string(),
                    value: other.to_string(),
                    expected: "'request' or 'process'".to_string(),
                })
            }
        };

        let safety_settings = match var("GEMINI_SAFETY_SETTINGS").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("on") | Some("true") | Some("1") => true,
            Some("off") | Some("false") | Some("0") => false,
            Some(other) => {
                return Err(AppError::InvalidEnvVar {
                    name: "GEMINI_SAFETY_SETTINGS".to_string(),
                    value: other.to_string(),
                    expected: "'on' or 'off'".to_string(),
                })
            }
        };

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(p) => p.trim().parse().map_err(|_| AppError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: p.clone(),
                expected: "a port number".to_string(),
            })?,
        };

        Ok(Self {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            reference_docs,
            seed_cache,
            safety_settings,
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "3000")])).unwrap_err();
        assert!(matches!(err, AppError::MissingEnvVar { ref name } if name == API_KEY_VAR));

        let blank = Config::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(blank, AppError::MissingEnvVar { .. }));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.api_base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.seed_cache, SeedCachePolicy::PerRequest);
        assert!(config.safety_settings);
        assert_eq!(config.port, 8080);
        assert!(config.static_dir.is_none());
        assert_eq!(config.reference_docs.len(), 2);
        assert_eq!(config.reference_docs[0].path, PathBuf::from("./data/cge_hh_h12025.csv"));
        assert_eq!(config.reference_docs[0].period, "H1 2025");
        assert_eq!(config.reference_docs[1].period, "H2 2024");
    }

    #[test]
    fn overrides_are_honoured() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            ("DATA_DIR", "/srv/hh"),
            ("SEED_CACHE", "Process"),
            ("GEMINI_SAFETY_SETTINGS", "off"),
            ("GEMINI_API_BASE_URL", "http://127.0.0.1:9000/"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(config.seed_cache, SeedCachePolicy::PerProcess);
        assert!(!config.safety_settings);
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.port, 3000);
        assert_eq!(config.reference_docs[1].path, PathBuf::from("/srv/hh/cge_hh_h22024.csv"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "k"), ("SEED_CACHE", "forever")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidEnvVar { ref name, .. } if name == "SEED_CACHE"));

        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "k"), ("PORT", "http")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidEnvVar { ref name, .. } if name == "PORT"));
    }
}

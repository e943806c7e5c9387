use std::{
    collections::HashMap,
    env, fmt, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
    str::FromStr,
};

use anyhow::bail;
use directories::BaseDirs;

/// The models the dashboard may talk to, validated at startup instead of
/// being looked up in a string map at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Versatile,
    Instant,
    Guard,
}

impl ModelChoice {
    /// Wire-format model identifier sent to the chat-completion service.
    pub fn id(self) -> &'static str {
        match self {
            Self::Versatile => "llama-3.1-70b-versatile",
            Self::Instant => "llama-3.1-8b-instant",
            Self::Guard => "llama-guard-3-8b",
        }
    }

    /// Human-readable name shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Versatile => "Llama 70B Versatile",
            Self::Instant => "Llama 8B Instant",
            Self::Guard => "Llama Guard 8B",
        }
    }
}

impl FromStr for ModelChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "versatile" | "70b" | "llama-3.1-70b-versatile" => Ok(Self::Versatile),
            "instant" | "8b" | "llama-3.1-8b-instant" => Ok(Self::Instant),
            "guard" | "llama-guard-3-8b" => Ok(Self::Guard),
            other => bail!("unknown model '{}' (expected versatile, instant or guard)", other),
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .greenboardrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "GROQ_API_KEY",
        "API_BASE_URL",
        "DEFAULT_MODEL",
        "DEFAULT_TEMPERATURE",
        "DASHBOARD_PASSWORD",
        "DATA_PATH",
        "GEO_DATA_PATH",
        "EXCERPT_ROWS",
        "REQUEST_TIMEOUT",
        "PRETTIFY_MARKDOWN",
    ];

    KEYS.contains(&k) || k.starts_with("GREENBOARD_") || k.starts_with("GROQ_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("greenboard").join(".greenboardrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Strings
    m.insert("API_BASE_URL".into(), "default".into());
    m.insert("DEFAULT_MODEL".into(), "llama-3.1-70b-versatile".into());
    m.insert("DASHBOARD_PASSWORD".into(), "greenmovement".into());
    m.insert("DATA_PATH".into(), "datasampah1.csv".into());
    m.insert("GEO_DATA_PATH".into(), "datalokasi.csv".into());

    // Numbers
    m.insert("DEFAULT_TEMPERATURE".into(), "0.7".into());
    m.insert("EXCERPT_ROWS".into(), "20".into());
    m.insert("REQUEST_TIMEOUT".into(), "60".into());

    // Bools as strings
    m.insert("PRETTIFY_MARKDOWN".into(), "true".into());

    m
}

#[cfg(test)]
mod tests {
    use super::ModelChoice;

    #[test]
    fn model_choice_accepts_aliases_and_ids() {
        assert_eq!("versatile".parse::<ModelChoice>().unwrap(), ModelChoice::Versatile);
        assert_eq!("Instant".parse::<ModelChoice>().unwrap(), ModelChoice::Instant);
        assert_eq!(
            "llama-guard-3-8b".parse::<ModelChoice>().unwrap(),
            ModelChoice::Guard
        );
    }

    #[test]
    fn model_choice_rejects_unknown_names() {
        assert!("gpt-4o".parse::<ModelChoice>().is_err());
    }
}

//! Runtime configuration: rc file plus environment overlay.

use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .scriptrunrc if exists
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

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }

    /// Sample-name pool, honoring a comma-separated SAMPLE_NAMES override.
    pub fn sample_names(&self) -> Vec<String> {
        match self.get("SAMPLE_NAMES") {
            Some(csv) => csv
                .split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
            None => crate::params::DEFAULT_NAMES
                .iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or SCRIPTRUN_* for forward-compat
    const KEYS: &[&str] = &["SCRIPTS_PATH", "DEFAULT_COLOR", "SAMPLE_NAMES"];

    KEYS.contains(&k) || k.starts_with("SCRIPTRUN_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("scriptrun").join(".scriptrunrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("SCRIPTS_PATH".into(), "scripts.json".into());
    m.insert("DEFAULT_COLOR".into(), "green".into());
    m
}

use serde::Deserialize;
use std::path::PathBuf;

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout_secs() -> u64 {
    // Client timeout slightly higher than the 180s server-side query timeout
    200
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    #[serde(default)]
    pub district_column: Option<String>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub overpass: Option<OverpassConfig>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("kreisgrenzen.toml"));
    paths.push(PathBuf::from(".kreisgrenzen.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("kreisgrenzen").join("config.toml"));
        paths.push(config_dir.join("kreisgrenzen.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".kreisgrenzen.toml"));
        paths.push(home.join(".config").join("kreisgrenzen").join("config.toml"));
    }

    paths
}

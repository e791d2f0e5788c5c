//! Configuration helpers shared by the tool crates

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read an environment variable, treating unset and blank values alike
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load and deserialize a JSON configuration file
pub fn load_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        values: Vec<u32>,
    }

    fn temp_file(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "agent-utils-config-{}-{}.json",
            std::process::id(),
            contents.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_file() {
        let path = temp_file(r#"{"name": "sample", "values": [1, 2, 3]}"#);
        let sample: Sample = load_json_file(&path).unwrap();
        assert_eq!(sample.name, "sample");
        assert_eq!(sample.values, vec![1, 2, 3]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_json_file_reports_path() {
        let err = load_json_file::<Sample>("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_env_var_missing() {
        assert_eq!(env_var("AGENT_UTILS_SURELY_UNSET_VARIABLE"), None);
    }
}

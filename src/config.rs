//! netmon configuration persistence (htoprc-style key=value format)
//!
//! Saves/loads settings to `$XDG_CONFIG_HOME/netmon/netmonrc`
//! (falling back to `~/.config/netmon/netmonrc`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config file path
fn config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("netmon").join("netmonrc"));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home).join(".config").join("netmon").join("netmonrc")
    })
}

/// Persistable settings (subset of App state)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetmonConfig {
    /// Refresh interval, clamped to 200..=10000 ms
    pub update_interval_ms: u64,
    /// Show the confirmation overlay before terminating
    pub confirm_kill: bool,
}

impl Default for NetmonConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1000,
            confirm_kill: true,
        }
    }
}

impl NetmonConfig {
    /// Load config from the default location, returning defaults if the
    /// file doesn't exist
    pub fn load() -> Self {
        match config_path() {
            Some(p) => Self::load_from(&p),
            None => Self::default(),
        }
    }

    /// Load config from a specific file. Unknown keys and malformed lines
    /// are ignored; out-of-range values are clamped.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "update_interval_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.update_interval_ms = v.clamp(200, 10000);
                        }
                    }
                    "confirm_kill" => cfg.confirm_kill = value == "1",
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        match config_path() {
            Some(p) => self.save_to(&p),
            None => Err("Could not determine config path".into()),
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let b = |v: bool| if v { "1" } else { "0" };
        let content = format!(
            "# netmon configuration file\n\
             # Auto-generated — do not edit while netmon is running\n\
             \n\
             update_interval_ms={}\n\
             confirm_kill={}\n",
            self.update_interval_ms,
            b(self.confirm_kill),
        );

        let mut file = fs::File::create(path)
            .map_err(|e| format!("Failed to create config file: {}", e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Build config from current App state
    pub fn from_app(app: &crate::app::App) -> Self {
        Self {
            update_interval_ms: app.update_interval_ms,
            confirm_kill: app.confirm_kill,
        }
    }

    /// Apply loaded config to App state
    pub fn apply_to(&self, app: &mut crate::app::App) {
        app.update_interval_ms = self.update_interval_ms;
        app.confirm_kill = self.confirm_kill;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_rc_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netmon").join("netmonrc");

        let cfg = NetmonConfig { update_interval_ms: 2500, confirm_kill: false };
        cfg.save_to(&path).unwrap();

        assert_eq!(NetmonConfig::load_from(&path), cfg);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = NetmonConfig::load_from(&dir.path().join("nope"));
        assert_eq!(cfg, NetmonConfig::default());
    }

    #[test]
    fn ignores_junk_and_clamps_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netmonrc");
        fs::write(
            &path,
            "# comment\n\
             no_equals_sign\n\
             unknown_key=7\n\
             update_interval_ms=50\n\
             confirm_kill=0\n",
        )
        .unwrap();

        let cfg = NetmonConfig::load_from(&path);
        assert_eq!(cfg.update_interval_ms, 200); // clamped from 50
        assert!(!cfg.confirm_kill);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use bridge_logging::{bridge_error, bridge_info, bridge_warn};
use clipbrief_bridge::write_state_file;
use clipbrief_core::Theme;
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = "state.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedState {
    theme: String,
}

fn state_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clipbrief"))
}

pub(crate) fn load_theme() -> Option<Theme> {
    load_theme_from(&state_dir()?)
}

pub(crate) fn save_theme(theme: Theme) {
    let Some(dir) = state_dir() else {
        bridge_error!("No config directory; theme preference not persisted");
        return;
    };
    save_theme_in(&dir, theme);
}

fn load_theme_from(dir: &Path) -> Option<Theme> {
    let path = dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            bridge_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return None;
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            bridge_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return None;
        }
    };

    match Theme::parse(&state.theme) {
        Some(theme) => {
            bridge_info!("Loaded persisted theme from {:?}", path);
            Some(theme)
        }
        None => {
            bridge_warn!("Unknown theme {:?} in {:?}", state.theme, path);
            None
        }
    }
}

fn save_theme_in(dir: &Path, theme: Theme) {
    let state = PersistedState {
        theme: theme.as_str().to_owned(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            bridge_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    if let Err(err) = write_state_file(dir, STATE_FILENAME, &content) {
        bridge_error!("Failed to write persisted state to {:?}: {}", dir, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn theme_round_trips_through_the_state_file() {
        let temp = TempDir::new().unwrap();
        save_theme_in(temp.path(), Theme::Dark);
        // A fresh load stands in for an app restart.
        assert_eq!(load_theme_from(temp.path()), Some(Theme::Dark));

        save_theme_in(temp.path(), Theme::Light);
        assert_eq!(load_theme_from(temp.path()), Some(Theme::Light));
    }

    #[test]
    fn missing_state_file_loads_nothing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme_from(temp.path()), None);
    }

    #[test]
    fn corrupt_state_file_loads_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATE_FILENAME), "not ron at all").unwrap();
        assert_eq!(load_theme_from(temp.path()), None);

        fs::write(temp.path().join(STATE_FILENAME), "(theme:\"mauve\")").unwrap();
        assert_eq!(load_theme_from(temp.path()), None);
    }
}

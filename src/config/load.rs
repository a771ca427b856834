use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use super::schema::Settings;

impl Settings {
    /// Layer, lowest first: struct defaults, the config file if present,
    /// then `CADENZA__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = resolve_config_path() {
            tracing::debug!(path = %path.display(), "config file");
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("CADENZA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Range checks the deserializer cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.player.volume) {
            return Err("player.volume must be within 0.0..=1.0".to_string());
        }
        if !(self.controls.volume_step > 0.0 && self.controls.volume_step <= 1.0) {
            return Err("controls.volume_step must be within (0.0, 1.0]".to_string());
        }
        Ok(())
    }
}

/// Where to look for the config file, from the current environment.
fn resolve_config_path() -> Option<PathBuf> {
    config_path_from(
        env::var_os("CADENZA_CONFIG_PATH"),
        env::var_os("XDG_CONFIG_HOME"),
        env::var_os("HOME"),
    )
}

/// An explicit path wins, then `$XDG_CONFIG_HOME/cadenza/config.toml`, then
/// `$HOME/.config/cadenza/config.toml`. Empty variables count as unset.
pub(super) fn config_path_from(
    explicit: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let set = |v: Option<OsString>| v.filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(path) = set(explicit) {
        return Some(path);
    }
    set(xdg_config_home)
        .or_else(|| set(home).map(|home| home.join(".config")))
        .map(|dir| dir.join("cadenza").join("config.toml"))
}

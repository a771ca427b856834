use crate::config;

/// Load settings, falling back to defaults on any failure.
///
/// Config is optional, so a broken file never prevents startup. The reason
/// for a fallback is returned so it can be logged once logging is set up
/// from the settings themselves.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

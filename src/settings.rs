use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use dungen_gen::GeneratorConfig;
use dungen_map::PopulateConfig;
use serde::Deserialize;

/// Everything the CLI can be configured with, layered as built-in defaults,
/// then the TOML file, then `DUNGEN_<SECTION>__<KEY>` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub populate: PopulateConfig,
}

impl Settings {
    pub const ENV_PREFIX: &'static str = "DUNGEN";

    /// A missing file is not an error; a malformed one is.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(Self::ENV_PREFIX))
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        log::debug!("settings: {settings:?}");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> Environment {
        Environment::with_prefix(Settings::ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings =
            Settings::load_with_env(Path::new("/nonexistent/dungen.toml"), no_env()).expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("dungen-settings-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[generator]\nwidth = 64\nroom_count = 6\n\n[populate]\nboss_percent = 10")
            .expect("write");
        drop(file);

        let settings = Settings::load_with_env(&path, no_env()).expect("load");
        std::fs::remove_file(&path).ok();
        assert_eq!(settings.generator.width, 64);
        assert_eq!(settings.generator.room_count, 6);
        assert_eq!(settings.generator.depth, GeneratorConfig::DEFAULT_DEPTH);
        assert_eq!(settings.populate.boss_percent, 10);
    }

    #[test]
    fn environment_overrides_file() {
        let env = Environment::with_prefix(Settings::ENV_PREFIX).source(Some(HashMap::from([
            ("DUNGEN_GENERATOR__CORRIDOR_WIDTH".to_owned(), "1".to_owned()),
            ("DUNGEN_POPULATE__SAFE_RADIUS".to_owned(), "22.5".to_owned()),
        ])));
        let settings =
            Settings::load_with_env(Path::new("/nonexistent/dungen.toml"), env).expect("load");
        assert_eq!(settings.generator.corridor_width, 1);
        assert_eq!(settings.populate.safe_radius, 22.5);
    }
}

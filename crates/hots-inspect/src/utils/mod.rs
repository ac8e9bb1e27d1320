use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use hots_data::builds::BUILD_REGISTRY_FILE_NAME;
use hots_data::{DataIndex, LoadOptions};
use miette::Result;

pub mod config;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Where to load data from, after merging command-line flags over config.toml.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub data_path: Utf8PathBuf,
    pub build: Option<u32>,
}

impl DataSource {
    /// Flags win over config values.
    pub fn resolve(
        data_path: Option<Utf8PathBuf>,
        build: Option<u32>,
        cfg: &config::AppConfig,
    ) -> Result<Self> {
        let data_path = data_path
            .or_else(|| cfg.data_path.clone())
            .ok_or(CliError::DataPathNotSet)?;
        ensure_data_path(&data_path)?;

        Ok(Self {
            data_path,
            build: build.or(cfg.build),
        })
    }

    pub fn load(&self) -> Result<DataIndex> {
        let mut options = LoadOptions::new().with_logging(true);
        if let Some(build) = self.build {
            options = options.with_build(build);
        }

        Ok(hots_data::initialize(&self.data_path, options).map_err(CliError::from)?)
    }
}

pub fn is_valid_data_path(path: &Utf8Path) -> bool {
    path.join(BUILD_REGISTRY_FILE_NAME).is_file()
}

pub fn ensure_data_path(path: &Utf8Path) -> Result<()> {
    if !is_valid_data_path(path) {
        return Err(CliError::invalid_data_path(path.to_path_buf()).into());
    }
    Ok(())
}

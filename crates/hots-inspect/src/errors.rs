use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("No data folder configured")]
    #[diagnostic(
        code(config::data_path_missing),
        help("Pass --data-path or run 'hots-inspect config set-data-path <path>'")
    )]
    DataPathNotSet,

    #[error("Not a hero data folder: {path}")]
    #[diagnostic(
        code(config::invalid_data_path),
        help("The data folder must contain Builds.xml and one folder per build")
    )]
    InvalidDataPath { path: Utf8PathBuf },

    #[error("Failed to load hero data")]
    #[diagnostic(
        code(data::load_failed),
        help("The data folder is inconsistent; the cause above names the offending file or entry")
    )]
    LoadFailed {
        #[source]
        source: hots_data::Error,
    },

    #[error("Hero not found: {name}")]
    #[diagnostic(
        code(hero::not_found),
        help("Run 'hots-inspect heroes' to list the heroes of the loaded build")
    )]
    HeroNotFound { name: String },

    #[error("Failed to save config")]
    #[diagnostic(code(config::save_failed), help("Check file permissions next to the executable"))]
    ConfigSaveFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output")]
    #[diagnostic(code(output::json_failed))]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    pub fn invalid_data_path(path: Utf8PathBuf) -> Self {
        Self::InvalidDataPath { path }
    }

    pub fn hero_not_found(name: impl Into<String>) -> Self {
        Self::HeroNotFound { name: name.into() }
    }
}

impl From<hots_data::Error> for CliError {
    fn from(source: hots_data::Error) -> Self {
        Self::LoadFailed { source }
    }
}

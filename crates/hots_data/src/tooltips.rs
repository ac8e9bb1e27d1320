//! Line-oriented `key=value` text stores for tooltips and hero descriptions.
//!
//! Lines starting with `--` are comments. Every other non-blank line is split on
//! its first `=`. A key may appear only once per file.

use crate::error::{Error, Result};
use crate::utils::read_text;
use camino::Utf8Path;
use std::collections::HashMap;

pub const SHORT_TALENT_TOOLTIPS_FILE_NAME: &str = "_ShortTalentTooltips.txt";
pub const FULL_TALENT_TOOLTIPS_FILE_NAME: &str = "_FullTalentTooltips.txt";
pub const HERO_DESCRIPTIONS_FILE_NAME: &str = "_HeroDescriptions.txt";

/// First build that ships hero descriptions.
pub const HERO_DESCRIPTION_BUILD: u32 = 55844;

/// Key to text mapping loaded from one file.
#[derive(Debug, Clone, Default)]
pub struct TooltipStore {
    entries: HashMap<String, String>,
}

impl TooltipStore {
    /// Load a store from a file on disk.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = read_text(path)?;
        let file = path.file_name().unwrap_or(path.as_str());
        Self::parse(&source, file)
    }

    /// Parse a store from text. `file` names the source in error messages.
    pub fn parse(source: &str, file: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (number, line) in source.lines().enumerate() {
            if line.starts_with("--") || line.trim().is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::MalformedLine {
                    file: file.to_string(),
                    line: number + 1,
                });
            };

            if entries.contains_key(key) {
                return Err(Error::DuplicateKey {
                    file: file.to_string(),
                    key: key.to_string(),
                });
            }
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All text stores of one build.
#[derive(Debug, Clone, Default)]
pub struct BuildTexts {
    pub short_tooltips: TooltipStore,
    pub full_tooltips: TooltipStore,
    /// `None` for builds older than [`HERO_DESCRIPTION_BUILD`].
    pub descriptions: Option<TooltipStore>,
}

impl BuildTexts {
    /// Load the text stores from a build folder.
    pub fn load(build_dir: &Utf8Path, build: u32) -> Result<Self> {
        let short_tooltips = TooltipStore::load(&build_dir.join(SHORT_TALENT_TOOLTIPS_FILE_NAME))?;
        let full_tooltips = TooltipStore::load(&build_dir.join(FULL_TALENT_TOOLTIPS_FILE_NAME))?;

        let descriptions = if build >= HERO_DESCRIPTION_BUILD {
            Some(TooltipStore::load(
                &build_dir.join(HERO_DESCRIPTIONS_FILE_NAME),
            )?)
        } else {
            None
        };

        tracing::debug!(
            "Loaded {} short and {} full tooltips for build {}",
            short_tooltips.len(),
            full_tooltips.len(),
            build
        );

        Ok(Self {
            short_tooltips,
            full_tooltips,
            descriptions,
        })
    }
}

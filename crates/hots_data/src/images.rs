//! Image reference construction.
//!
//! Image references are dot-separated resource paths:
//! `<image root>.<folder>[.<subfolder>].<file name>`.

use crate::error::{Error, Result};

/// Default resource root for all image references.
pub const DEFAULT_IMAGE_ROOT: &str = "Heroes.Icons.Images";

pub const HERO_PORTRAITS_FOLDER: &str = "HeroPortraits";
pub const HERO_LEADERBOARD_PORTRAITS_FOLDER: &str = "HeroLeaderboardPortraits";
pub const HERO_LOADING_SCREEN_PORTRAITS_FOLDER: &str = "HeroLoadingScreenPortraits";
pub const TALENTS_FOLDER: &str = "Talents";
pub const GENERIC_TALENTS_FOLDER: &str = "_Generic";

pub const NO_TALENT_PICK_ICON: &str = "storm_ui_icon_no_pick.png";
pub const NO_TALENT_FOUND_ICON: &str = "storm_ui_icon_not_found.png";
pub const NO_PORTRAIT_PICK: &str = "storm_ui_ingame_heroselect_btn_nopick.png";
pub const NO_PORTRAIT_FOUND: &str = "storm_ui_ingame_heroselect_btn_notfound.png";
pub const NO_LEADERBOARD_PICK: &str = "storm_ui_ingame_hero_leaderboard_nopick.png";
pub const NO_LEADERBOARD_FOUND: &str = "storm_ui_ingame_hero_leaderboard_notfound.png";
pub const NO_LOADING_SCREEN_PICK: &str = "storm_ui_ingame_hero_loadingscreen_nopick.png";
pub const NO_LOADING_SCREEN_FOUND: &str = "storm_ui_ingame_hero_loadingscreen_notfound.png";

const SUPPORTED_EXTENSIONS: [&str; 2] = ["dds", "png"];

/// Which placeholder portrait set to use for a hero that is not in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitPlaceholder {
    NoPick,
    NotFound,
}

/// Builds image references under one resource root.
#[derive(Debug, Clone)]
pub struct ImagePaths {
    root: String,
}

impl ImagePaths {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Talent icon reference. Generic icons live in a shared folder instead of the hero's.
    ///
    /// Fails if `file_name` is not a `.dds` or `.png` image.
    pub fn talent_icon(&self, hero_name: &str, file_name: &str, generic: bool) -> Result<String> {
        if !has_supported_extension(file_name) {
            return Err(Error::UnsupportedIconExtension(file_name.to_string()));
        }

        let folder = if generic {
            GENERIC_TALENTS_FOLDER
        } else {
            hero_name
        };
        Ok(format!(
            "{}.{}.{}.{}",
            self.root, TALENTS_FOLDER, folder, file_name
        ))
    }

    /// Reference for a sentinel talent icon, which always lives in the generic folder.
    pub(crate) fn sentinel_talent_icon(&self, file_name: &str) -> String {
        format!(
            "{}.{}.{}.{}",
            self.root, TALENTS_FOLDER, GENERIC_TALENTS_FOLDER, file_name
        )
    }

    pub fn portrait(&self, folder: &str, file_name: &str) -> String {
        format!("{}.{}.{}", self.root, folder, file_name)
    }

    /// Hero, leaderboard and loading-screen references for a hero record.
    pub fn hero_portraits(&self, portrait: &str, leaderboard: &str, loading: &str) -> [String; 3] {
        [
            self.portrait(HERO_PORTRAITS_FOLDER, portrait),
            self.portrait(HERO_LEADERBOARD_PORTRAITS_FOLDER, leaderboard),
            self.portrait(HERO_LOADING_SCREEN_PORTRAITS_FOLDER, loading),
        ]
    }

    pub(crate) fn placeholder_portraits(&self, placeholder: PortraitPlaceholder) -> [String; 3] {
        match placeholder {
            PortraitPlaceholder::NoPick => {
                self.hero_portraits(NO_PORTRAIT_PICK, NO_LEADERBOARD_PICK, NO_LOADING_SCREEN_PICK)
            }
            PortraitPlaceholder::NotFound => self.hero_portraits(
                NO_PORTRAIT_FOUND,
                NO_LEADERBOARD_FOUND,
                NO_LOADING_SCREEN_FOUND,
            ),
        }
    }
}

impl Default for ImagePaths {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_ROOT)
    }
}

fn has_supported_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, extension)) => {
            !stem.is_empty()
                && SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| extension.eq_ignore_ascii_case(supported))
        }
        None => false,
    }
}

//! Hero and talent records.
//!
//! Enumerated fields are parsed permissively: a value that does not name a known
//! variant falls back to a documented default instead of failing the load.
//!
//! | Field        | Fallback               |
//! |--------------|------------------------|
//! | `franchise`  | [`HeroFranchise::Unknown`] |
//! | `type`       | [`HeroType::Unknown`]      |
//! | `difficulty` | [`HeroDifficulty::Unknown`] |
//! | `mana`       | [`HeroMana::Mana`]         |
//! | role token   | [`HeroRole::Unknown`]      |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse an enum variant from its exact name, or `None` if no variant matches.
pub(crate) fn parse_variant<T: DeserializeOwned>(value: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
}

fn serde_fmt<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match serde_json::to_value(value).map_err(|_| fmt::Error)? {
        serde_json::Value::String(s) => f.write_str(&s),
        _ => Err(fmt::Error),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeroFranchise {
    Classic,
    Diablo,
    Overwatch,
    Starcraft,
    Warcraft,
    Nexus,
    #[default]
    Unknown,
}

/// Melee or ranged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeroType {
    Melee,
    Ranged,
    #[default]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeroDifficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    #[default]
    Unknown,
}

/// The resource a hero spends on abilities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeroMana {
    #[default]
    Mana,
    Brew,
    Energy,
    Fury,
    Scrap,
    Ammo,
    Charge,
    None,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroRole {
    Warrior,
    Assassin,
    Support,
    Specialist,
    Multiclass,
    Tank,
    Bruiser,
    Healer,
    RangedAssassin,
    MeleeAssassin,
    Unknown,
}

impl HeroRole {
    /// Parse a comma-separated role list, keeping the given order.
    pub fn parse_list(value: &str) -> Vec<HeroRole> {
        value
            .split(',')
            .map(|token| parse_variant(token.trim()).unwrap_or(HeroRole::Unknown))
            .collect()
    }
}

/// A talent selection level. `Old` holds talents that were removed from a hero's kit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TalentTier {
    Level1,
    Level4,
    Level7,
    Level10,
    Level13,
    Level16,
    Level20,
    Old,
}

impl TalentTier {
    pub const ALL: [TalentTier; 8] = [
        TalentTier::Level1,
        TalentTier::Level4,
        TalentTier::Level7,
        TalentTier::Level10,
        TalentTier::Level13,
        TalentTier::Level16,
        TalentTier::Level20,
        TalentTier::Old,
    ];

    /// Match a tier container element name exactly.
    pub fn from_element_name(name: &str) -> Option<Self> {
        parse_variant(name)
    }
}

impl fmt::Display for TalentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serde_fmt(self, f)
    }
}

impl FromStr for TalentTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_element_name(s).ok_or_else(|| format!("unknown talent tier: {}", s))
    }
}

/// A playable hero as recorded for one build.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// File-safe name, e.g. `Anubarak`.
    pub short_name: String,
    /// Real (display) name, e.g. `Anub'arak`. Defaults to the short name.
    pub name: String,
    /// Four character id used in replay files, e.g. `Anub`.
    pub attribute_id: String,
    pub unit_name: String,
    pub franchise: HeroFranchise,
    #[serde(rename = "type")]
    pub hero_type: HeroType,
    pub difficulty: HeroDifficulty,
    pub mana_type: HeroMana,
    /// First build the hero is playable in. `0` when unknown.
    pub build_available: u32,
    pub roles: Vec<HeroRole>,
    pub hero_portrait: String,
    pub leaderboard_portrait: String,
    pub loading_portrait: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Hero {
    /// A placeholder hero that is never stored in an index.
    pub(crate) fn placeholder(name: &str, portraits: [String; 3]) -> Self {
        let [hero_portrait, leaderboard_portrait, loading_portrait] = portraits;
        Self {
            short_name: String::new(),
            name: name.to_string(),
            attribute_id: String::new(),
            unit_name: String::new(),
            franchise: HeroFranchise::Unknown,
            hero_type: HeroType::Unknown,
            difficulty: HeroDifficulty::Unknown,
            mana_type: HeroMana::Mana,
            build_available: 0,
            roles: Vec::new(),
            hero_portrait,
            leaderboard_portrait,
            loading_portrait,
            description: None,
        }
    }
}

/// Cost and cooldown details shown in a talent tooltip.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TalentTooltip {
    pub short: String,
    pub full: String,
    /// Copied from the owning hero.
    pub mana_type: HeroMana,
    /// `0` when the talent has no cost.
    pub mana: u32,
    /// The cost is paid per second rather than once.
    pub is_per_mana_cost: bool,
    /// `0` when the talent has no cooldown.
    pub cooldown: u32,
    pub is_charge_cooldown: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    pub reference_name: String,
    /// In-game display name.
    pub name: String,
    pub tier: TalentTier,
    pub icon: String,
    pub is_icon_generic: bool,
    /// Shared across heroes rather than part of one hero's kit.
    pub is_generic: bool,
    /// Key into the tooltip text files.
    pub tooltip_key: String,
    pub tooltip: TalentTooltip,
}

impl Talent {
    pub(crate) fn no_pick(tier: TalentTier, icon: String) -> Self {
        Self {
            reference_name: String::new(),
            name: "No pick".to_string(),
            tier,
            icon,
            is_icon_generic: true,
            is_generic: true,
            tooltip_key: String::new(),
            tooltip: TalentTooltip::default(),
        }
    }

    pub(crate) fn not_found(reference_name: &str, tier: TalentTier, icon: String) -> Self {
        Self {
            reference_name: reference_name.to_string(),
            name: reference_name.to_string(),
            tier,
            icon,
            is_icon_generic: false,
            is_generic: false,
            tooltip_key: String::new(),
            tooltip: TalentTooltip::default(),
        }
    }
}

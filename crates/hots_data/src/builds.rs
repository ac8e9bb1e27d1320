//! Build registry and build alias resolution.
//!
//! The registry (`Builds.xml` at the data root) lists every known build together
//! with the patch notes it links to:
//!
//! ```xml
//! <Builds>
//!   <Build type="Balance" link="https://example.invalid/47479">47479</Build>
//!   <Build pre="47479">47801</Build>
//! </Builds>
//! ```
//!
//! An entry with `pre` reuses the patch notes of an entry defined earlier in the file.
//!
//! Every build folder has a root data file (`Heroes.xml`) listing the heroes to
//! load. A build that ships no new hero data points at an earlier build with a
//! `pre` attribute on that root element; [`resolve_alias`] follows those links
//! until it reaches the build whose data should actually be loaded.

use crate::error::{Error, Result};
use crate::utils::parse_build_number;
use crate::xml::{read_document, Element};
use camino::Utf8Path;
use serde::Serialize;
use std::collections::HashMap;

pub const BUILD_REGISTRY_FILE_NAME: &str = "Builds.xml";
pub const ROOT_DATA_FILE_NAME: &str = "Heroes.xml";

/// Oldest build with supported data. Older registry entries only provide patch notes.
pub const MINIMUM_BUILD: u32 = 47479;

/// Build at which alias chains always stop.
pub const BASE_BUILD: u32 = 47479;

/// Patch notes linked from a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchNotes {
    /// Kind of patch, as given by the registry's `type` attribute.
    pub kind: String,
    pub link: String,
}

/// All builds listed in the registry.
#[derive(Debug, Clone)]
pub struct BuildCatalog {
    /// Supported builds, highest first.
    builds: Vec<u32>,
    patch_notes: HashMap<u32, PatchNotes>,
}

impl BuildCatalog {
    /// Read the registry under `data_root` and check that every supported build has a folder.
    pub fn load(data_root: &Utf8Path) -> Result<Self> {
        let registry_path = data_root.join(BUILD_REGISTRY_FILE_NAME);
        let registry = read_document(&registry_path)?;

        let entries = read_registry(&registry, &registry_path)?;

        for (build, _) in &entries {
            let build_dir = data_root.join(build.to_string());
            if *build >= MINIMUM_BUILD && !build_dir.as_std_path().is_dir() {
                return Err(Error::MissingBuildFolder(build_dir));
            }
        }

        let catalog = Self::from_entries(entries).ok_or_else(|| Error::InvalidRegistry {
            path: registry_path,
            reason: format!("no build at or above {}", MINIMUM_BUILD),
        })?;

        tracing::info!(
            "Build registry loaded: {} builds, latest {}, earliest {}",
            catalog.builds.len(),
            catalog.latest(),
            catalog.earliest()
        );

        Ok(catalog)
    }

    /// Build a catalog from registry entries in file order.
    ///
    /// Returns `None` if no entry is a supported build.
    fn from_entries(entries: Vec<(u32, PatchNotes)>) -> Option<Self> {
        let mut builds: Vec<u32> = entries
            .iter()
            .map(|(build, _)| *build)
            .filter(|build| *build >= MINIMUM_BUILD)
            .collect();
        if builds.is_empty() {
            return None;
        }
        builds.sort_unstable_by(|a, b| b.cmp(a));

        Some(Self {
            builds,
            patch_notes: entries.into_iter().collect(),
        })
    }

    /// Supported builds, highest first.
    pub fn builds(&self) -> &[u32] {
        &self.builds
    }

    pub fn latest(&self) -> u32 {
        self.builds[0]
    }

    /// Lowest supported build, never below [`MINIMUM_BUILD`].
    pub fn earliest(&self) -> u32 {
        self.builds[self.builds.len() - 1].max(MINIMUM_BUILD)
    }

    pub fn contains(&self, build: u32) -> bool {
        self.builds.contains(&build)
    }

    /// Patch notes for any registry entry, including ones below [`MINIMUM_BUILD`].
    pub fn patch_notes(&self, build: u32) -> Option<&PatchNotes> {
        self.patch_notes.get(&build)
    }
}

/// Read `(build, patch notes)` entries in file order, resolving `pre` inheritance.
fn read_registry(registry: &Element, path: &Utf8Path) -> Result<Vec<(u32, PatchNotes)>> {
    if registry.name != "Builds" {
        return Err(Error::InvalidRegistry {
            path: path.to_path_buf(),
            reason: format!("expected root element <Builds>, found <{}>", registry.name),
        });
    }

    let mut entries: Vec<(u32, PatchNotes)> = Vec::with_capacity(registry.children.len());
    let mut known: HashMap<u32, usize> = HashMap::new();

    for entry in &registry.children {
        let build = parse_build_number(&entry.text)?;
        if known.contains_key(&build) {
            return Err(Error::DuplicateBuild(build));
        }

        let notes = match entry.non_empty_attribute("pre") {
            None => PatchNotes {
                kind: entry.attribute("type").unwrap_or_default().to_string(),
                link: entry.attribute("link").unwrap_or_default().to_string(),
            },
            Some(pre) => {
                let predecessor = parse_build_number(pre)?;
                let position = known
                    .get(&predecessor)
                    .ok_or(Error::UnknownPredecessor { build, predecessor })?;
                entries[*position].1.clone()
            }
        };

        known.insert(build, entries.len());
        entries.push((build, notes));
    }

    Ok(entries)
}

/// Root data file of the build whose hero data is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuild {
    /// The build whose folder is read.
    pub build: u32,
    /// Hero short names in load order.
    pub heroes: Vec<String>,
}

/// Follow `pre` links from `requested` to the build that owns the hero data.
///
/// The walk stops at [`BASE_BUILD`] or at the first root data file without a `pre`
/// attribute. Each link must point at a lower build that is listed in `catalog`,
/// so a chain can take at most as many hops as there are known builds.
pub fn resolve_alias(data_root: &Utf8Path, catalog: &BuildCatalog, requested: u32) -> Result<ResolvedBuild> {
    let mut current = requested;

    for _ in 0..=catalog.builds().len() {
        let root_path = data_root
            .join(current.to_string())
            .join(ROOT_DATA_FILE_NAME);
        let root = read_document(&root_path)?;

        let predecessor = match root.non_empty_attribute("pre") {
            Some(pre) if current != BASE_BUILD => parse_build_number(pre)?,
            _ => {
                return Ok(ResolvedBuild {
                    build: current,
                    heroes: root.children.iter().map(|hero| hero.name.clone()).collect(),
                })
            }
        };

        if predecessor >= current || predecessor < BASE_BUILD || !catalog.contains(predecessor) {
            return Err(Error::BuildChainUnresolved {
                requested,
                stopped_at: predecessor,
            });
        }

        tracing::debug!("Build {} reuses hero data from build {}", current, predecessor);
        current = predecessor;
    }

    Err(Error::BuildChainUnresolved {
        requested,
        stopped_at: current,
    })
}

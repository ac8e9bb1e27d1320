//! Versioned hero and talent data for Heroes of the Storm builds.
//!
//! A data folder holds a build registry (`Builds.xml`) and one folder per game
//! build. Each build folder lists its heroes in `Heroes.xml`, stores one XML record
//! per hero, and carries the tooltip and description text files for that build.
//! A build whose hero data did not change can point at an earlier build through
//! the `pre` attribute and reuse its records.
//!
//! This crate loads one build into an immutable [`DataIndex`]:
//!
//! - **Build catalog**: registry builds, newest first, with patch notes
//! - **Hero records**: info, roles, and talents by tier with tooltip text
//! - **Lookups**: real names from attribute ids or short names, talent owners
//! - **Placeholders**: "no pick" and "not found" records for replay rendering
//!
//! Loading validates the data thoroughly; any inconsistency is an [`Error`].
//! Queries on a loaded index never fail and can be shared across threads.
//!
//! # Example
//!
//! ```no_run
//! use hots_data::{LoadOptions, TalentTier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = hots_data::initialize(
//!     "/path/to/HeroesData",
//!     LoadOptions::new()
//!         .with_logging(true)
//!         .with_diagnostics(|miss| eprintln!("lookup miss: {}", miss)),
//! )?;
//!
//! println!("Loaded build {} ({} heroes)", index.loaded_build(), index.total_heroes());
//!
//! let hero = index.real_name_from_attribute_id("Anub").unwrap_or_default();
//! let talent = index.hero_talent(hero, TalentTier::Level1, "AnubarakScarabHostBeetleBarrier");
//! println!("{}: {}", talent.name, talent.tooltip.short);
//! # Ok(())
//! # }
//! ```

pub mod builds;
pub mod error;
pub mod hero_parser;
pub mod images;
pub mod index;
pub mod model;
pub mod options;
pub mod tooltips;
pub mod utils;
pub mod xml;

// Re-export main types
pub use builds::{BuildCatalog, PatchNotes, BASE_BUILD, MINIMUM_BUILD};
pub use error::{Error, Result};
pub use images::ImagePaths;
pub use index::{DataIndex, NO_PICK_HERO_NAME};
pub use model::{
    Hero, HeroDifficulty, HeroFranchise, HeroMana, HeroRole, HeroType, Talent, TalentTier,
    TalentTooltip,
};
pub use options::{Diagnostic, DiagnosticSink, LoadOptions};

use camino::Utf8Path;

/// Load a build from the data folder at `data_root`.
///
/// Loads [`LoadOptions::build`] or, when unset, the latest build in the registry.
pub fn initialize(data_root: impl AsRef<Utf8Path>, options: LoadOptions) -> Result<DataIndex> {
    DataIndex::load(data_root.as_ref(), options)
}

//! Error types for loading build data.
//!
//! Every fallible function in this crate returns [`Result<T>`], which uses [`Error`]
//! as the error type. All variants describe load-time integrity failures: once one
//! is returned the whole load is abandoned and no [`DataIndex`](crate::DataIndex)
//! is produced. Query misses on a loaded index never produce an [`Error`].

use crate::model::TalentTier;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading build data.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a data file from disk failed.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A markup file is not well-formed.
    #[error("Malformed XML in {path}: {source}")]
    Xml {
        path: Utf8PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// The build registry does not have the expected shape.
    #[error("Invalid build registry {path}: {reason}")]
    InvalidRegistry { path: Utf8PathBuf, reason: String },

    /// A build number in the registry or a `pre` attribute is not an integer.
    #[error("Could not convert build number to an integer: '{value}'")]
    InvalidBuildNumber { value: String },

    /// The same build number is listed twice in the registry.
    #[error("Build {0} is listed more than once in the build registry")]
    DuplicateBuild(u32),

    /// A registry entry inherits patch notes from a build that was not defined before it.
    #[error("Build {build} references predecessor {predecessor}, which is not defined before it")]
    UnknownPredecessor { build: u32, predecessor: u32 },

    /// A supported build has no data folder.
    #[error("Could not find required build folder: {0}")]
    MissingBuildFolder(Utf8PathBuf),

    /// An explicitly requested build is not in the registry.
    #[error("Build {0} is not listed in the build registry")]
    UnknownBuild(u32),

    /// Following `pre` links from the requested build never reached an authoritative build.
    #[error("Build chain starting at {requested} did not resolve to a base build (stopped at {stopped_at})")]
    BuildChainUnresolved { requested: u32, stopped_at: u32 },

    /// A tooltip or description line has no `=` separator.
    #[error("Malformed line {line} in {file}: expected key=value")]
    MalformedLine { file: String, line: usize },

    /// A tooltip or description key appears twice in the same file.
    #[error("An item with the same key has already been added in {file}: {key}")]
    DuplicateKey { file: String, key: String },

    /// A hero listed for a description-enabled build has no description.
    #[error("No hero description found for {0}")]
    MissingHeroDescription(String),

    /// A required attribute is absent from a hero record.
    #[error("[{hero}] missing required attribute '{attribute}'")]
    MissingAttribute { hero: String, attribute: &'static str },

    /// Blocks of a hero record are out of order.
    #[error("[{hero}] expected <{expected}> but found <{found}>")]
    UnexpectedElement {
        hero: String,
        expected: &'static str,
        found: String,
    },

    /// A hero record ended before a required block.
    #[error("[{hero}] record ended before <{expected}>")]
    MissingElement { hero: String, expected: &'static str },

    /// A numeric talent attribute could not be converted.
    #[error("[{hero}] {talent}: could not convert '{field}' value '{value}' to an integer")]
    InvalidNumber {
        hero: String,
        talent: String,
        field: &'static str,
        value: String,
    },

    /// An icon file name is not a `.dds` or `.png` image.
    #[error("Image file does not have .dds or .png extension [{0}]")]
    UnsupportedIconExtension(String),

    /// Two heroes share an attribute id.
    #[error("Duplicate hero attribute id {attribute_id} [{hero}]")]
    DuplicateAttributeId { attribute_id: String, hero: String },

    /// Two heroes share a short name.
    #[error("Duplicate hero short name {0}")]
    DuplicateShortName(String),

    /// Two heroes share a real name.
    #[error("Duplicate hero name {0}")]
    DuplicateHeroName(String),

    /// A hero declares the same talent reference name twice.
    #[error("[{build}] [{hero}] {talent} already exists")]
    DuplicateTalent {
        build: u32,
        hero: String,
        talent: String,
    },

    /// Two heroes claim the same talent reference name in the same tier.
    #[error("Same key {talent} in tier {tier} [{hero}]")]
    DuplicateTierTalent {
        tier: TalentTier,
        talent: String,
        hero: String,
    },

    /// Talents were attached to a hero whose info block was never registered.
    #[error("Hero short name not found: {0}")]
    HeroNotRegistered(String),
}

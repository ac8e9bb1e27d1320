//! Load configuration and the diagnostic sink for query misses.

use crate::images::DEFAULT_IMAGE_ROOT;
use std::fmt;
use std::sync::Arc;

/// A query on a loaded index that did not find what it asked for.
///
/// Misses are expected (callers look up names speculatively), so they are reported
/// here instead of failing the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No talents are stored for the hero.
    HeroTalentsNotFound { hero: String },
    /// The hero has no talent with this reference name.
    TalentNotFound { hero: String, talent: String },
    /// No hero has this attribute id.
    AttributeIdNotFound { attribute_id: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HeroTalentsNotFound { hero } => {
                write!(f, "No hero talents found for [realHeroName]: {}", hero)
            }
            Diagnostic::TalentNotFound { hero, talent } => {
                write!(f, "Talent icon: {} [{}]", talent, hero)
            }
            Diagnostic::AttributeIdNotFound { attribute_id } => {
                write!(f, "No hero name for attribute: {}", attribute_id)
            }
        }
    }
}

/// Receives every [`Diagnostic`] raised by index queries.
pub type DiagnosticSink = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

/// Options for [`initialize`](crate::initialize).
#[derive(Clone)]
pub struct LoadOptions {
    /// Build to load. `None` selects the latest build in the registry.
    pub build: Option<u32>,
    /// Emit query misses as `tracing` warnings.
    pub enable_logging: bool,
    /// Resource root prefixed to every image reference.
    pub image_root: String,
    diagnostics: Option<DiagnosticSink>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    pub fn with_image_root(mut self, root: impl Into<String>) -> Self {
        self.image_root = root.into();
        self
    }

    /// Install a sink that receives query misses, in addition to any logging.
    pub fn with_diagnostics<F>(mut self, sink: F) -> Self
    where
        F: Fn(&Diagnostic) + Send + Sync + 'static,
    {
        self.diagnostics = Some(Arc::new(sink));
        self
    }

    pub(crate) fn diagnostics(&self) -> Option<DiagnosticSink> {
        self.diagnostics.clone()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            build: None,
            enable_logging: false,
            image_root: DEFAULT_IMAGE_ROOT.to_string(),
            diagnostics: None,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("build", &self.build)
            .field("enable_logging", &self.enable_logging)
            .field("image_root", &self.image_root)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

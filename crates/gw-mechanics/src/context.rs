//! Explicit configuration threaded through every derivation and roll.

use gw_core::{Localizer, NoLocalizer, StatCatalog};

/// The collaborators a derivation pass reads from.
#[derive(Clone, Copy)]
pub struct EngineContext<'a> {
    /// Ordering and labeling authority for stats.
    pub catalog: &'a StatCatalog,
    /// Resolves catalog label keys to display text.
    pub localizer: &'a dyn Localizer,
}

impl<'a> EngineContext<'a> {
    /// Build a context from a catalog and a localizer.
    pub fn new(catalog: &'a StatCatalog, localizer: &'a dyn Localizer) -> Self {
        Self { catalog, localizer }
    }

    /// A context whose labels fall back to raw keys.
    pub fn unlocalized(catalog: &'a StatCatalog) -> Self {
        Self {
            catalog,
            localizer: &NoLocalizer,
        }
    }
}

impl std::fmt::Debug for EngineContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("catalog", self.catalog)
            .finish_non_exhaustive()
    }
}

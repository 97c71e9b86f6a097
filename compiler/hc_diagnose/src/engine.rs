//! The shared, read-only diagnosis engine.

use hc_sign::{build_registry, SignError, SignRegistry, SignSets};
use thiserror::Error;

use crate::{DispatchTable, TableError};

/// Failure to assemble an [`Engine`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Sign(#[from] SignError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Sign registry plus the dispatch table derived from it.
#[derive(Debug)]
pub struct Engine {
    registry: SignRegistry,
    table: DispatchTable,
}

impl Engine {
    /// Build an engine over the standard sign-sets.
    pub fn build() -> Result<Self, EngineError> {
        Self::with_sign_sets(&SignSets::standard())
    }

    /// Build an engine whose dispatch table is derived from `sets`.
    pub fn with_sign_sets(sets: &SignSets) -> Result<Self, EngineError> {
        let registry = build_registry()?;
        let table = DispatchTable::build(sets)?;
        Ok(Engine { registry, table })
    }

    pub fn registry(&self) -> &SignRegistry {
        &self.registry
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }
}

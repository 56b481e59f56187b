//! # Domain Traits
//!
//! Abstract interfaces for resolving where the running unit lives.
//! Allows the reporter to be exercised against fixed paths in tests.

use std::path::PathBuf;

use crate::domain::paths::{self, LocateError};

/// Resolves the location of the running unit.
pub trait UnitLocator: Send + Sync {
    /// Path of the unit itself (not its directory).
    fn unit_path(&self) -> Result<PathBuf, LocateError>;

    /// Project root derived from the unit path, recomputed on each call.
    fn project_root(&self) -> Result<PathBuf, LocateError> {
        let unit = self.unit_path()?;
        paths::project_root(&unit)
    }
}

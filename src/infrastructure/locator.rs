//! # Unit Locators
//!
//! Concrete `UnitLocator` implementations.

use std::path::PathBuf;

use crate::domain::paths::LocateError;
use crate::domain::traits::UnitLocator;

/// Locates the running executable through the platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExe;

impl UnitLocator for CurrentExe {
    fn unit_path(&self) -> Result<PathBuf, LocateError> {
        std::env::current_exe().map_err(|source| LocateError::LocationResolution { source })
    }
}

/// Always reports the same unit path.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

#[cfg(test)]
impl UnitLocator for FixedPath {
    fn unit_path(&self) -> Result<PathBuf, LocateError> {
        Ok(self.0.clone())
    }
}

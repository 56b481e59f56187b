//! # Locate Command
//!
//! Prints the project root once, without an MCP client.

use anyhow::{Context, Result};
use std::io::Write;

use crate::domain::traits::UnitLocator;

pub fn handle_locate(locator: &dyn UnitLocator, out: &mut impl Write) -> Result<()> {
    let root = locator
        .project_root()
        .context("Failed to locate project root")?;
    writeln!(out, "{}", root.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::locator::FixedPath;
    use std::path::PathBuf;

    #[test]
    fn test_locate_prints_root() {
        let locator = FixedPath(PathBuf::from("/a/b/c/d/unit"));
        let mut out = Vec::new();
        handle_locate(&locator, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/a/b\n");
    }

    #[test]
    fn test_locate_reports_bounds_error() {
        let locator = FixedPath(PathBuf::from("/a/unit"));
        let mut out = Vec::new();
        let err = handle_locate(&locator, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("fewer than 3 levels"));
    }
}

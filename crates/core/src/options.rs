// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler options.
//!
//! Options can be built in code or loaded from a TOML file such as:
//!
//! ```toml
//! strict_dates = true
//! max_depth = 16
//! max_leaves = 100
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Options controlling parsing limits and date failure handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CompileOptions {
    /// Reject unparseable dates under date-kind fields instead of dropping
    /// the constraint.
    pub strict_dates: bool,
    /// Maximum combinator nesting accepted by the parser.
    pub max_depth: usize,
    /// Maximum number of leaf comparisons accepted by the parser.
    pub max_leaves: usize,
}

const DEFAULT_MAX_DEPTH: usize = 32;
const DEFAULT_MAX_LEAVES: usize = 256;

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            strict_dates: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_leaves: DEFAULT_MAX_LEAVES,
        }
    }
}

impl CompileOptions {
    /// Returns default options with strict date handling enabled.
    pub fn strict() -> Self {
        CompileOptions {
            strict_dates: true,
            ..Self::default()
        }
    }

    /// Parses options from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: CompileOptions = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read options: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Saves options to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize options: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        if self.max_leaves == 0 {
            return Err(Error::Config("max_leaves must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

//! Script definitions loaded from the scripts file.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A named unit of rhai source text plus its input/output type metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptDefinition {
    /// Script name; filled from the map key when absent.
    #[serde(default)]
    pub name: String,
    /// Source text handed to the engine.
    #[serde(default)]
    pub script: String,
    /// Type names the script's bindings are declared against.
    #[serde(default)]
    pub input_types: Vec<String>,
    /// Type name the result is converted to.
    #[serde(default)]
    pub return_type: String,
}

impl ScriptDefinition {
    /// Rejects definitions missing a required field, naming the field.
    pub fn validate(&self) -> Result<()> {
        if self.script.trim().is_empty() {
            bail!("script '{}' is missing required field: script", self.name);
        }
        if self.input_types.is_empty() || self.input_types.iter().any(|t| t.trim().is_empty()) {
            bail!(
                "script '{}' is missing required field: input_types",
                self.name
            );
        }
        if self.return_type.trim().is_empty() {
            bail!(
                "script '{}' is missing required field: return_type",
                self.name
            );
        }
        Ok(())
    }
}

/// The `scripts` section of the scripts file, keyed by script name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptSet {
    #[serde(default)]
    pub scripts: BTreeMap<String, ScriptDefinition>,
}

impl ScriptSet {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scripts file: {}", path.display()))?;
        let mut set: ScriptSet = serde_json::from_str(&text)
            .with_context(|| format!("parsing scripts file: {}", path.display()))?;
        for (key, definition) in set.scripts.iter_mut() {
            if definition.name.is_empty() {
                definition.name = key.clone();
            }
        }
        Ok(set)
    }
}

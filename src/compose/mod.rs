//! Compose file loading, build-context stripping, and dumping
//!
//! Removes the `build` key from every service definition in a Compose-style
//! YAML document, keeping `image` references and everything else intact.
//! Useful when deploying to platforms that cannot build images from local
//! contexts and must pull pre-built images instead.

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub struct BuildStripper {
    dry_run: bool,
}

#[derive(Debug)]
pub struct StripResult {
    pub file: PathBuf,
    pub removed: Vec<String>,
}

impl BuildStripper {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Strip build contexts from `input` and write the result to `output`.
    ///
    /// In dry-run mode the input is parsed and the removals are counted,
    /// but nothing is written.
    pub fn strip_file(&self, input: &Path, output: &Path) -> Result<StripResult> {
        let mut compose = load(input)?;

        let removed = remove_builds(&mut compose);
        debug!("removed {} build key(s)", removed.len());

        if !self.dry_run {
            dump(&compose, output)?;
        }

        Ok(StripResult {
            file: output.to_path_buf(),
            removed,
        })
    }
}

/// Read and parse a YAML file into a document value.
pub fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML: {}", path.display()))
}

/// Serialize a document to YAML and write it to `path`, creating or
/// truncating the file. Mapping keys are emitted in insertion order.
pub fn dump(data: &Value, path: &Path) -> Result<()> {
    let content = serde_yaml::to_string(data)?;

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Remove the `build` key from every service mapping in the document.
///
/// Anything not shaped like a Compose file passes through unchanged: a
/// non-mapping root, a missing or non-mapping `services` key, and service
/// entries that are not mappings are all left as-is rather than treated as
/// errors. Returns the names of the services a `build` key was removed
/// from.
pub fn remove_builds(compose: &mut Value) -> Vec<String> {
    let mut removed = Vec::new();

    if let Value::Mapping(root) = compose {
        if let Some(Value::Mapping(services)) = root.get_mut("services") {
            for (name, service) in services.iter_mut() {
                if let Value::Mapping(service) = service {
                    // A service whose only key was `build` is kept behind
                    // as an empty mapping, never deleted.
                    if service.remove("build").is_some() {
                        let name = name.as_str().unwrap_or_default().to_string();
                        trace!("removed build key from service '{}'", name);
                        removed.push(name);
                    }
                }
            }
        }
    }

    removed
}

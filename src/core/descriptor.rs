use crate::domain::model::Project;
use crate::utils::error::{PrepError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DESCRIPTOR_FILE: &str = "ivydependencies.json";

pub fn descriptor_file(project_dir: &Path) -> PathBuf {
    project_dir.join(DESCRIPTOR_FILE)
}

pub fn load_projects(dep_files: &[PathBuf]) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    for path in dep_files {
        projects.extend(read_descriptor_file(path)?);
    }
    Ok(projects)
}

// A descriptor maps project name to descriptor entry. Names are only used as
// keys; duplicates silently overwrite in load order.
pub fn read_descriptor_file(path: &Path) -> Result<Vec<Project>> {
    tracing::debug!("Reading dependency descriptor {}", path.display());
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    let entries = match value {
        serde_json::Value::Object(entries) => entries,
        _ => {
            return Err(PrepError::InvalidDescriptor {
                path: path.display().to_string(),
                reason: "Top level must be an object mapping project name to descriptor"
                    .to_string(),
            })
        }
    };

    entries
        .into_iter()
        .map(|(_name, entry)| serde_json::from_value(entry).map_err(PrepError::from))
        .collect()
}

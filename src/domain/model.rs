use crate::utils::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// One entry of an ivydependencies.json descriptor. The project name keying
// the entry is dropped at parse time; later entries with the same name win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub scala_version: Option<String>,
    pub dependencies: Option<Vec<String>>,
    pub cross_scala_versions: Option<Vec<String>>,
}

impl Project {
    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or(&[])
    }

    pub fn cross_scala_versions(&self) -> &[String] {
        self.cross_scala_versions.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalaVersion {
    major: String,
    minor: String,
    patch: String,
}

impl ScalaVersion {
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(PrepError::MalformedScalaVersion {
                version: version.to_string(),
            });
        }
        if parts[0] != "2" {
            return Err(PrepError::UnsupportedScalaVersion {
                version: version.to_string(),
            });
        }
        Ok(Self {
            major: parts[0].to_string(),
            minor: parts[1].to_string(),
            patch: parts[2].to_string(),
        })
    }

    // "2.13" for "2.13.4"; cross builds are compatible within a major version
    pub fn major_version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for ScalaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// Coordinates fetched together in a single fetch-tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyGroup {
    pub coordinates: Vec<String>,
}

impl DependencyGroup {
    pub fn new(coordinates: Vec<String>) -> Self {
        Self { coordinates }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates.join(", "))
    }
}

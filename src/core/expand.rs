use crate::domain::model::ScalaVersion;
use crate::utils::error::{PrepError, Result};

// Expands ivy dependency shorthand into a fully qualified coordinate.
//
//   org:name:ver        plain Java dependency, returned as-is
//   org::name:ver       name is suffixed with the major Scala version (name_2.13)
//   org::name::ver      name is suffixed with the full Scala version (name_2.13.4)
//
// The empty fields act as markers and must be empty; anything else is malformed.
pub fn expand_dep(scala_version: Option<&str>, dep: &str) -> Result<String> {
    let parts: Vec<&str> = dep.split(':').collect();
    match parts.len() {
        3 => Ok(dep.to_string()),
        4 => {
            if !parts[1].is_empty() {
                return Err(malformed(dep));
            }
            let version = require_version(scala_version, dep)?;
            let parsed = ScalaVersion::parse(version)?;
            Ok(format!(
                "{}:{}_{}:{}",
                parts[0],
                parts[2],
                parsed.major_version(),
                parts[3]
            ))
        }
        5 => {
            if !parts[1].is_empty() || !parts[2].is_empty() {
                return Err(malformed(dep));
            }
            let version = require_version(scala_version, dep)?;
            Ok(format!("{}:{}_{}:{}", parts[0], parts[3], version, parts[4]))
        }
        _ => Err(malformed(dep)),
    }
}

fn malformed(dep: &str) -> PrepError {
    PrepError::MalformedCoordinate {
        coordinate: dep.to_string(),
    }
}

fn require_version<'a>(scala_version: Option<&'a str>, dep: &str) -> Result<&'a str> {
    scala_version.ok_or_else(|| PrepError::MissingScalaVersion {
        coordinate: dep.to_string(),
    })
}

use crate::core::expand::expand_dep;
use crate::domain::model::{DependencyGroup, Project, ScalaVersion};
use crate::utils::error::Result;
use std::collections::HashSet;

const SCALA_ORG: &str = "org.scala-lang";

pub fn scala_library_dep(version: &str) -> String {
    format!("{}:scala-library:{}", SCALA_ORG, version)
}

pub fn scala_compiler_dep(version: &str) -> String {
    format!("{}:scala-compiler:{}", SCALA_ORG, version)
}

// Computes the dependency groups to fetch, in first-occurrence order with
// exact duplicates removed. crossScalaVersions are only honored when some
// project in the batch uses a scalaVersion with a matching major version.
pub fn resolve(projects: &[Project]) -> Result<Vec<DependencyGroup>> {
    let known_versions = known_scala_versions(projects);
    let known_majors = known_versions
        .iter()
        .map(|version| Ok(ScalaVersion::parse(version)?.major_version()))
        .collect::<Result<HashSet<String>>>()?;

    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for project in projects {
        // The project's own version may be absent; that still yields a group
        // of plain Java dependencies.
        let mut all_versions: Vec<Option<String>> = vec![project.scala_version.clone()];
        for cross in filter_cross_versions(&known_majors, project.cross_scala_versions())? {
            all_versions.push(Some(cross));
        }

        for version in &all_versions {
            let mut coordinates = Vec::new();
            for dep in project.dependencies() {
                coordinates.push(expand_dep(version.as_deref(), dep)?);
            }
            if let Some(version) = version {
                coordinates.push(scala_library_dep(version));
            }
            push_unique(&mut groups, &mut seen, DependencyGroup::new(coordinates));
        }
    }

    // One compiler fetch per distinct Scala version, not per project.
    for version in &known_versions {
        let group = DependencyGroup::new(vec![scala_compiler_dep(version)]);
        push_unique(&mut groups, &mut seen, group);
    }

    Ok(groups)
}

fn known_scala_versions(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .filter_map(|project| project.scala_version.clone())
        .filter(|version| !version.is_empty())
        .filter(|version| seen.insert(version.clone()))
        .collect()
}

fn filter_cross_versions(
    known_majors: &HashSet<String>,
    cross_versions: &[String],
) -> Result<Vec<String>> {
    let mut kept = Vec::new();
    for version in cross_versions {
        if known_majors.contains(&ScalaVersion::parse(version)?.major_version()) {
            kept.push(version.clone());
        }
    }
    Ok(kept)
}

fn push_unique(
    groups: &mut Vec<DependencyGroup>,
    seen: &mut HashSet<DependencyGroup>,
    group: DependencyGroup,
) {
    if seen.insert(group.clone()) {
        groups.push(group);
    }
}

use crate::core::descriptor;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_existing_dir, validate_existing_file, validate_non_empty_list, validate_path,
    Validate,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scala-prep")]
#[command(about = "Prefetch Scala build dependencies and build reproducible jars")]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Specify level of verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and prefetch ivy dependencies for a set of projects
    Fetch(FetchConfig),
    /// Build a reproducible jar from one or more directories
    Jar(JarConfig),
}

#[derive(Debug, Clone, Args)]
pub struct FetchConfig {
    #[arg(
        required = true,
        help = "Dependency descriptor files, or project directories containing ivydependencies.json"
    )]
    pub inputs: Vec<PathBuf>,

    #[arg(long, default_value = "./build", help = "Root for the toolchain install and ivy cache")]
    pub install_root: PathBuf,

    #[arg(long, help = "Override the ivy cache directory")]
    pub cache_dir: Option<PathBuf>,
}

impl FetchConfig {
    // Directories stand for their ivydependencies.json
    pub fn descriptor_files(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .map(|input| {
                if input.is_dir() {
                    descriptor::descriptor_file(input)
                } else {
                    input.clone()
                }
            })
            .collect()
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("inputs", &self.inputs)?;
        for file in self.descriptor_files() {
            validate_existing_file("inputs", &file)?;
        }
        validate_path("install_root", &self.install_root)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct JarConfig {
    #[arg(short, long, help = "Path of the jar to write")]
    pub output: PathBuf,

    #[arg(required = true, help = "Directories whose contents go into the jar")]
    pub dirs: Vec<PathBuf>,
}

impl Validate for JarConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output", &self.output)?;
        validate_non_empty_list("dirs", &self.dirs)?;
        for dir in &self.dirs {
            validate_existing_dir("dirs", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fetch_config_maps_directories_to_descriptor_files() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = dir.path().join("ivydependencies.json");
        fs::write(&descriptor, "{}").unwrap();

        let config = FetchConfig {
            inputs: vec![dir.path().to_path_buf(), PathBuf::from("explicit.json")],
            install_root: PathBuf::from("./build"),
            cache_dir: None,
        };

        assert_eq!(
            config.descriptor_files(),
            vec![descriptor, PathBuf::from("explicit.json")]
        );
    }

    #[test]
    fn test_fetch_config_rejects_missing_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let config = FetchConfig {
            inputs: vec![dir.path().to_path_buf()],
            install_root: PathBuf::from("./build"),
            cache_dir: None,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jar_config_requires_existing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let ok = JarConfig {
            output: PathBuf::from("out.jar"),
            dirs: vec![dir.path().to_path_buf()],
        };
        assert!(ok.validate().is_ok());

        let missing = JarConfig {
            output: PathBuf::from("out.jar"),
            dirs: vec![dir.path().join("missing")],
        };
        assert!(missing.validate().is_err());
    }
}

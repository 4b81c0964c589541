pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{Cli, Command, FetchConfig, JarConfig};
pub use core::fetch::CoursierFetcher;
pub use domain::model::{DependencyGroup, Project, ScalaVersion};
pub use domain::ports::Fetcher;
pub use utils::error::{PrepError, Result};

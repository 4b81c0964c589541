pub mod descriptor;
pub mod expand;
pub mod fetch;
pub mod install;
pub mod jar;
pub mod resolve;

pub use crate::domain::model::{DependencyGroup, Project, ScalaVersion};
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::Result;

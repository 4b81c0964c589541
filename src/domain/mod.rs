pub mod model;
pub mod ports;

pub use model::{DependencyGroup, Project, ScalaVersion};
pub use ports::Fetcher;

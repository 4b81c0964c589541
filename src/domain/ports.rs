use crate::domain::model::DependencyGroup;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, cache_dir: &Path, group: &DependencyGroup) -> Result<()>;
}

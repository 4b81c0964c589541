use crate::domain::model::DependencyGroup;
use crate::domain::ports::Fetcher;
use crate::utils::error::{PrepError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

// Shells out to the coursier launcher, one invocation per dependency group.
pub struct CoursierFetcher {
    binary: PathBuf,
}

impl CoursierFetcher {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

#[async_trait]
impl Fetcher for CoursierFetcher {
    async fn fetch(&self, cache_dir: &Path, group: &DependencyGroup) -> Result<()> {
        let status = Command::new(&self.binary)
            .arg("fetch")
            .arg("--cache")
            .arg(cache_dir)
            .args(&group.coordinates)
            .status()
            .await?;

        if !status.success() {
            return Err(PrepError::FetchFailed {
                coordinates: group.to_string(),
            });
        }
        Ok(())
    }
}

// Groups are fetched strictly in order; the first failure aborts the run.
pub async fn fetch_all<F: Fetcher>(
    fetcher: &F,
    cache_dir: &Path,
    groups: &[DependencyGroup],
) -> Result<()> {
    for group in groups {
        tracing::debug!("Fetching [{}]...", group);
        fetcher.fetch(cache_dir, group).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct RecordingFetcher {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        fail_on: Option<usize>,
    }

    impl RecordingFetcher {
        fn new(fail_on: Option<usize>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_on,
            }
        }

        async fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl Fetcher for RecordingFetcher {
        async fn fetch(&self, _cache_dir: &Path, group: &DependencyGroup) -> Result<()> {
            let mut calls = self.calls.lock().await;
            let index = calls.len();
            calls.push(group.coordinates.clone());
            if self.fail_on == Some(index) {
                return Err(PrepError::FetchFailed {
                    coordinates: group.to_string(),
                });
            }
            Ok(())
        }
    }

    fn groups() -> Vec<DependencyGroup> {
        vec![
            DependencyGroup::new(vec!["org.example:a:1.0".to_string()]),
            DependencyGroup::new(vec!["org.example:b:1.0".to_string()]),
            DependencyGroup::new(vec!["org.example:c:1.0".to_string()]),
        ]
    }

    #[tokio::test]
    async fn test_fetches_each_group_once_in_order() {
        let fetcher = RecordingFetcher::new(None);
        fetch_all(&fetcher, Path::new("cache"), &groups())
            .await
            .unwrap();

        assert_eq!(
            fetcher.calls().await,
            vec![
                vec!["org.example:a:1.0".to_string()],
                vec!["org.example:b:1.0".to_string()],
                vec!["org.example:c:1.0".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let fetcher = RecordingFetcher::new(Some(1));
        let result = fetch_all(&fetcher, Path::new("cache"), &groups()).await;

        assert!(matches!(result, Err(PrepError::FetchFailed { .. })));
        // The third group is never attempted
        assert_eq!(fetcher.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_names_the_group() {
        let fetcher = RecordingFetcher::new(Some(0));
        let err = fetch_all(&fetcher, Path::new("cache"), &groups())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("org.example:a:1.0"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_coursier_fetcher_reports_nonzero_exit() {
        let fetcher = CoursierFetcher::new(PathBuf::from("false"));
        let group = DependencyGroup::new(vec!["org.example:a:1.0".to_string()]);
        let result = fetcher.fetch(Path::new("cache"), &group).await;

        assert!(matches!(result, Err(PrepError::FetchFailed { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_coursier_fetcher_accepts_zero_exit() {
        let fetcher = CoursierFetcher::new(PathBuf::from("true"));
        let group = DependencyGroup::new(vec!["org.example:a:1.0".to_string()]);

        assert!(fetcher.fetch(Path::new("cache"), &group).await.is_ok());
    }
}

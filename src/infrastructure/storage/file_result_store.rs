//! JSON file implementation of the result store.
//!
//! Layout: `<root>/<region>/task_<task_id>.json`, each file holding the array
//! of observations one task produced for one region.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::domain::entities::{
    ArtifactLocations, RegionRecords, RegionResults, WeatherObservation,
};
use crate::domain::repositories::ResultStore;
use crate::error::AppError;

/// Result store writing one JSON artifact per (region, task).
pub struct FileResultStore {
    root: PathBuf,
}

impl FileResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn artifact_path(&self, region: &str, task_id: &str) -> PathBuf {
        self.root.join(region).join(format!("task_{task_id}.json"))
    }

    /// Lists `*.json` files of a region directory in file-name order.
    ///
    /// Returns `None` if the directory does not exist.
    async fn list_artifacts(&self, region: &str) -> Result<Option<Vec<PathBuf>>, AppError> {
        let dir = self.root.join(region);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") && entry.file_type().await?.is_file()
            {
                files.push(path);
            }
        }
        files.sort();

        Ok(Some(files))
    }
}

async fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

#[async_trait]
impl ResultStore for FileResultStore {
    async fn save(
        &self,
        task_id: &str,
        results: &RegionResults,
    ) -> Result<ArtifactLocations, AppError> {
        let persisted_at = Utc::now();
        let mut locations = ArtifactLocations::new();

        for (region, observations) in results {
            fs::create_dir_all(self.root.join(region)).await?;

            let stamped: Vec<WeatherObservation> = observations
                .iter()
                .cloned()
                .map(|mut observation| {
                    observation.time = persisted_at;
                    observation
                })
                .collect();

            let path = self.artifact_path(region, task_id);
            let bytes = serde_json::to_vec_pretty(&stamped)?;
            write_artifact(&path, &bytes).await?;

            debug!(task_id, region = %region, path = %path.display(), "Artifact written");
            locations.insert(region.clone(), path.to_string_lossy().into_owned());
        }

        Ok(locations)
    }

    async fn load_region(&self, region: &str) -> Result<Option<RegionRecords>, AppError> {
        let Some(files) = self.list_artifacts(region).await? else {
            return Ok(None);
        };
        if files.is_empty() {
            return Ok(None);
        }

        let mut records = RegionRecords::new();
        for path in files {
            let bytes = fs::read(&path).await?;
            let content: Value = serde_json::from_slice(&bytes)?;

            if !content.is_array() {
                warn!(path = %path.display(), "Skipping artifact: expected a list of observations");
                continue;
            }

            let observations: Vec<WeatherObservation> = serde_json::from_value(content)?;
            for observation in observations {
                let (city, stored) = observation.into_stored();
                records.entry(city).or_default().push(stored);
            }
        }

        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Reading;
    use chrono::TimeZone;

    fn observation(city: &str, temp: f64) -> WeatherObservation {
        WeatherObservation::new(
            city.to_string(),
            Reading {
                temp,
                description: "clear sky".to_string(),
            },
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_save_stamps_one_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::new(dir.path());

        let mut results = RegionResults::new();
        results.insert(
            "Europe".to_string(),
            vec![observation("Kyiv", 5.0), observation("Lviv", 3.0)],
        );

        let locations = store.save("t1", &results).await.unwrap();
        let path = PathBuf::from(&locations["Europe"]);
        assert!(path.ends_with("Europe/task_t1.json"));

        let written: Vec<WeatherObservation> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].time, written[1].time);
        assert_ne!(written[0].time, observation("Kyiv", 5.0).time);
    }

    #[tokio::test]
    async fn test_save_same_task_overwrites_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::new(dir.path());

        let mut first = RegionResults::new();
        first.insert("Europe".to_string(), vec![observation("Kyiv", 5.0)]);
        store.save("t1", &first).await.unwrap();

        let mut second = RegionResults::new();
        second.insert("Europe".to_string(), vec![observation("Lviv", 3.0)]);
        let locations = store.save("t1", &second).await.unwrap();

        let written: Vec<WeatherObservation> =
            serde_json::from_slice(&std::fs::read(&locations["Europe"]).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].city, "Lviv");
        assert_eq!(written[0].temp, 3.0);

        let records = store.load_region("Europe").await.unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records.contains_key("Kyiv"));
        assert_eq!(records["Lviv"].len(), 1);
        assert_eq!(records["Lviv"][0].temp, 3.0);
    }

    #[tokio::test]
    async fn test_missing_region_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::new(dir.path());

        assert!(store.load_region("Europe").await.unwrap().is_none());

        std::fs::create_dir(dir.path().join("Europe")).unwrap();
        assert!(store.load_region("Europe").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_list_artifact_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let region_dir = dir.path().join("Asia");
        std::fs::create_dir(&region_dir).unwrap();
        std::fs::write(region_dir.join("task_bad.json"), r#"{"city": "Tokyo"}"#).unwrap();

        let store = FileResultStore::new(dir.path());
        let records = store.load_region("Asia").await.unwrap().unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_artifact_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let region_dir = dir.path().join("Asia");
        std::fs::create_dir(&region_dir).unwrap();
        std::fs::write(region_dir.join("task_bad.json"), "not json").unwrap();

        let store = FileResultStore::new(dir.path());
        assert!(store.load_region("Asia").await.is_err());
    }
}

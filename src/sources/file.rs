use crate::models::{ListingSnapshot, Property};
use crate::sources::api::parse_properties;
use crate::sources::traits::PropertySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Property list read from a JSON file: either a saved [`ListingSnapshot`]
/// or a bare array as returned by `GET /Properties`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        info!("Reading properties from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        if body.trim_start().starts_with('[') {
            return parse_properties(&body);
        }

        let snapshot: ListingSnapshot = serde_json::from_str(&body)
            .with_context(|| format!("{} is not a listing snapshot", self.path.display()))?;
        info!(
            "Snapshot from {} taken at {}",
            snapshot.source, snapshot.fetched_at
        );
        Ok(snapshot.properties)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

/// Write a snapshot of `properties` to `path` as pretty JSON
pub async fn save_snapshot(path: &Path, snapshot: &ListingSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .with_context(|| format!("Failed to serialize snapshot for {}", path.display()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "💾 Saved {} properties to {}",
        snapshot.properties.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_bare_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.json");
        tokio::fs::write(
            &path,
            r#"[{"propertyId": 4, "city": "Kathmandu", "totalBedrooms": "2"}]"#,
        )
        .await
        .unwrap();

        let properties = JsonFileSource::new(&path).fetch().await.unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].bedrooms(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");

        let mut property = Property::new(11);
        property.city = "Pokhara".to_string();
        property.price = Some(9000);
        property
            .extra
            .insert("landlordId".to_string(), serde_json::json!(5));
        let snapshot = ListingSnapshot::new("rental-api", vec![property.clone()]);

        save_snapshot(&path, &snapshot).await.unwrap();
        let loaded = JsonFileSource::new(&path).fetch().await.unwrap();
        assert_eq!(loaded, vec![property]);
    }

    #[tokio::test]
    async fn test_save_error_names_the_directory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "not a directory").await.unwrap();

        let snapshot = ListingSnapshot::new("json-file", Vec::new());
        let err = save_snapshot(&blocker.join("snapshot.json"), &snapshot)
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to create directory"), "{}", message);
        assert!(message.contains("blocker"), "{}", message);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(source.fetch().await.is_err());
    }
}

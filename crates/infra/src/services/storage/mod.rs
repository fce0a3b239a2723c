use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::error;

/// Metadata of one object in a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub name: String,
    pub path: String,
    pub size: usize,
    pub mime_type: String,
}

/// External object storage. The store itself (auth, replication,
/// physical layout) is not this codebase's concern; this trait only
/// covers what the upload routes need.
#[async_trait::async_trait]
pub trait IStorageService: Send + Sync {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> anyhow::Result<()>;
    async fn list(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<StoredObject>>;
    async fn remove(&self, bucket: &str, path: &str) -> anyhow::Result<()>;
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// HTTP client against a hosted storage service with a
/// supabase-storage-compatible REST surface.
pub struct ObjectStorageService {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl ObjectStorageService {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            service_key,
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }
}

#[derive(Debug, Deserialize)]
struct RemoteObjectMetadata {
    size: Option<usize>,
    mimetype: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteObject {
    name: String,
    metadata: Option<RemoteObjectMetadata>,
}

#[async_trait::async_trait]
impl IStorageService for ObjectStorageService {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&self.object_url(bucket, path))
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, "3600")
            .body(bytes)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            error!("Storage upload to {}/{} failed: {} {}", bucket, path, status, body);
            anyhow::bail!("Storage upload failed with status {}", status);
        }
        Ok(())
    }

    async fn list(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<StoredObject>> {
        let res = self
            .client
            .post(&format!(
                "{}/storage/v1/object/list/{}",
                self.base_url, bucket
            ))
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({
                "prefix": prefix,
                "limit": limit,
                "sortBy": { "column": "created_at", "order": "desc" },
            }))
            .send()
            .await?;
        if !res.status().is_success() {
            anyhow::bail!("Storage list failed with status {}", res.status());
        }
        let objects: Vec<RemoteObject> = res.json().await?;
        Ok(objects
            .into_iter()
            .map(|o| {
                let path = if prefix.is_empty() {
                    o.name.clone()
                } else {
                    format!("{}/{}", prefix.trim_end_matches('/'), o.name)
                };
                StoredObject {
                    path,
                    size: o.metadata.as_ref().and_then(|m| m.size).unwrap_or(0),
                    mime_type: o
                        .metadata
                        .and_then(|m| m.mimetype)
                        .unwrap_or_else(|| "unknown".into()),
                    name: o.name,
                }
            })
            .collect())
    }

    async fn remove(&self, bucket: &str, path: &str) -> anyhow::Result<()> {
        let res = self
            .client
            .delete(&self.object_url(bucket, path))
            .bearer_auth(&self.service_key)
            .send()
            .await?;
        if !res.status().is_success() {
            anyhow::bail!("Storage delete failed with status {}", res.status());
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        )
    }
}

/// Storage backed by a map, for tests.
pub struct InMemoryStorageService {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl InMemoryStorageService {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
        }
    }

    fn key(bucket: &str, path: &str) -> String {
        format!("{}/{}", bucket, path)
    }
}

#[async_trait::async_trait]
impl IStorageService for InMemoryStorageService {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> anyhow::Result<()> {
        let mut objects = self.objects.lock().unwrap();
        objects.insert(
            Self::key(bucket, path),
            StoredObject {
                name: path.split('/').last().unwrap_or(path).to_string(),
                path: path.to_string(),
                size: bytes.len(),
                mime_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn list(
        &self,
        bucket: &str,
        prefix: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<StoredObject>> {
        let objects = self.objects.lock().unwrap();
        let bucket_prefix = format!("{}/{}", bucket, prefix);
        Ok(objects
            .iter()
            .filter(|(key, _)| key.starts_with(&bucket_prefix))
            .map(|(_, o)| o.clone())
            .take(limit)
            .collect())
    }

    async fn remove(&self, bucket: &str, path: &str) -> anyhow::Result<()> {
        let mut objects = self.objects.lock().unwrap();
        objects
            .remove(&Self::key(bucket, path))
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("No such object: {}/{}", bucket, path))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("memory://{}/{}", bucket, path)
    }
}

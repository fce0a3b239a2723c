use bauhub_domain::StorageBucket;
use bauhub_utils::create_random_secret;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret expected in the `Authorization: Bearer` header of the
    /// cron endpoint
    pub cron_secret: String,
    /// Port for the application to run on
    pub port: usize,
    /// Base url of the external object storage HTTP service
    pub storage_base_url: String,
    /// Service key used to authenticate against the object storage
    pub storage_service_key: String,
    /// Deployment specific bucket name overrides, keyed by the default
    /// bucket name
    bucket_names: HashMap<&'static str, String>,
}

impl Config {
    pub fn new() -> Self {
        let cron_secret = match std::env::var("CRON_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find CRON_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(16);
                info!(
                    "Secret for triggering the notification cron was generated and set to: {}",
                    secret
                );
                secret
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let storage_base_url =
            std::env::var("STORAGE_URL").unwrap_or_else(|_| "http://localhost:8000".into());
        let storage_service_key = std::env::var("STORAGE_SERVICE_KEY").unwrap_or_default();

        // BUCKET_PROJECT_PHOTOS=my-photos style overrides
        let mut bucket_names = HashMap::new();
        for bucket in StorageBucket::all().iter() {
            let env_key = format!(
                "BUCKET_{}",
                bucket.key().to_uppercase().replace('-', "_")
            );
            if let Ok(name) = std::env::var(&env_key) {
                bucket_names.insert(bucket.key(), name);
            }
        }

        Self {
            cron_secret,
            port,
            storage_base_url,
            storage_service_key,
            bucket_names,
        }
    }

    /// Resolves the deployment specific name of a bucket.
    pub fn bucket_name(&self, bucket: StorageBucket) -> String {
        self.bucket_names
            .get(bucket.key())
            .cloned()
            .unwrap_or_else(|| bucket.key().to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

use crate::upload::dtos::{StoredFileDTO, UploadErrorDTO, UploadedFileDTO};
use bauhub_domain::{StorageBucket, ID};
use serde::{Deserialize, Serialize};

pub mod upload_files {
    use super::*;

    /// JSON carried in the `metadata` part of the multipart body.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct UploadMetadata {
        pub bucket: StorageBucket,
        pub project_id: Option<ID>,
        pub user_id: Option<ID>,
        pub work_entry_id: Option<ID>,
        pub report_type: Option<String>,
        pub category: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub files: Vec<UploadedFileDTO>,
        pub errors: Vec<UploadErrorDTO>,
        pub total_files: usize,
        pub success_count: usize,
        pub error_count: usize,
    }
}

pub mod list_files {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub bucket: String,
        pub path: Option<String>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub bucket: String,
        pub path: String,
        pub files: Vec<StoredFileDTO>,
        pub total: usize,
    }
}

pub mod delete_file {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub bucket: String,
        pub path: String,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub bucket: String,
        pub path: String,
    }
}

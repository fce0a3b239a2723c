use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadedFileDTO {
    pub file_name: String,
    pub original_name: String,
    pub size: usize,
    pub r#type: String,
    pub url: String,
    pub path: String,
    pub bucket: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadErrorDTO {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoredFileDTO {
    pub name: String,
    pub path: String,
    pub size: usize,
    pub r#type: String,
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Most files may be at most 10MB; avatars are capped harder.
pub const DEFAULT_FILE_SIZE_LIMIT: usize = 10 * 1024 * 1024;
pub const AVATAR_FILE_SIZE_LIMIT: usize = 2 * 1024 * 1024;
pub const MAX_FILES_PER_BATCH: usize = 5;

const IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];
const DOCUMENT_MIME_TYPES: [&str; 10] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/dwg",
    "application/dxf",
    "image/jpeg",
    "image/png",
    "image/tiff",
];
const AVATAR_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
const REPORT_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/csv",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBucket {
    ProjectPhotos,
    WorkPhotos,
    ProjectDocuments,
    UserAvatars,
    Reports,
}

impl StorageBucket {
    pub fn all() -> [StorageBucket; 5] {
        [
            Self::ProjectPhotos,
            Self::WorkPhotos,
            Self::ProjectDocuments,
            Self::UserAvatars,
            Self::Reports,
        ]
    }

    /// Default bucket name in the object store; deployments may override
    /// the name through configuration.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ProjectPhotos => "project-photos",
            Self::WorkPhotos => "work-photos",
            Self::ProjectDocuments => "project-documents",
            Self::UserAvatars => "user-avatars",
            Self::Reports => "reports",
        }
    }

    pub fn policy(&self) -> BucketPolicy {
        match self {
            Self::ProjectPhotos | Self::WorkPhotos => BucketPolicy {
                allowed_mime_types: &IMAGE_MIME_TYPES,
                file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
                public: false,
            },
            Self::ProjectDocuments => BucketPolicy {
                allowed_mime_types: &DOCUMENT_MIME_TYPES,
                file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
                public: false,
            },
            Self::UserAvatars => BucketPolicy {
                allowed_mime_types: &AVATAR_MIME_TYPES,
                file_size_limit: AVATAR_FILE_SIZE_LIMIT,
                public: true,
            },
            Self::Reports => BucketPolicy {
                allowed_mime_types: &REPORT_MIME_TYPES,
                file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
                public: false,
            },
        }
    }
}

impl FromStr for StorageBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project-photos" => Ok(Self::ProjectPhotos),
            "work-photos" => Ok(Self::WorkPhotos),
            "project-documents" => Ok(Self::ProjectDocuments),
            "user-avatars" => Ok(Self::UserAvatars),
            "reports" => Ok(Self::Reports),
            _ => Err(format!("Invalid bucket name: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BucketPolicy {
    pub allowed_mime_types: &'static [&'static str],
    pub file_size_limit: usize,
    pub public: bool,
}

impl BucketPolicy {
    /// Validates one file against this bucket's policy. All violations are
    /// collected so a client sees everything wrong with the file at once.
    pub fn validate_file(
        &self,
        file_name: &str,
        mime_type: &str,
        size: usize,
    ) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if size > self.file_size_limit {
            errors.push(format!(
                "{}: file size {} exceeds the limit of {} bytes",
                file_name, size, self.file_size_limit
            ));
        }
        if !self.allowed_mime_types.contains(&mime_type) {
            errors.push(format!(
                "{}: file type {} is not allowed in this bucket",
                file_name, mime_type
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_oversized_file() {
        let policy = StorageBucket::ProjectPhotos.policy();
        let res = policy.validate_file("big.png", "image/png", DEFAULT_FILE_SIZE_LIMIT + 1);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_foreign_mime_type() {
        let policy = StorageBucket::ProjectPhotos.policy();
        assert!(policy
            .validate_file("cad.dwg", "application/dwg", 1024)
            .is_err());
        assert!(policy.validate_file("a.png", "image/png", 1024).is_ok());
    }

    #[test]
    fn avatars_have_a_tighter_size_cap() {
        let policy = StorageBucket::UserAvatars.policy();
        assert!(policy
            .validate_file("me.png", "image/png", AVATAR_FILE_SIZE_LIMIT + 1)
            .is_err());
        assert!(policy
            .validate_file("me.png", "image/png", AVATAR_FILE_SIZE_LIMIT)
            .is_ok());
    }

    #[test]
    fn bucket_names_round_trip() {
        for bucket in StorageBucket::all().iter() {
            assert_eq!(bucket.key().parse::<StorageBucket>().unwrap(), *bucket);
        }
    }
}

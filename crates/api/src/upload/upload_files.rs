use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::{UploadErrorDTO, UploadedFileDTO};
use bauhub_api_structs::upload_files::*;
use bauhub_domain::{DEFAULT_FILE_SIZE_LIMIT, MAX_FILES_PER_BATCH};
use bauhub_infra::Context;
use bauhub_utils::create_secure_file_name;
use futures::{StreamExt, TryStreamExt};
use tracing::error;

pub async fn upload_files_controller(
    mut payload: Multipart,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let mut metadata: Option<UploadMetadata> = None;
    let mut files = Vec::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition().clone();
        let field_name = content_disposition
            .as_ref()
            .and_then(|cd| cd.get_name())
            .unwrap_or("")
            .to_string();
        let mime_type = field.content_type().to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|_| AppError::BadClientData("Malformed multipart payload".into()))?;
            // hard ceiling while streaming, before any policy check
            if bytes.len() + chunk.len() > DEFAULT_FILE_SIZE_LIMIT {
                return Err(AppError::BadClientData(format!(
                    "File exceeds the maximum upload size of {} bytes",
                    DEFAULT_FILE_SIZE_LIMIT
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if field_name == "metadata" {
            let raw = String::from_utf8(bytes)
                .map_err(|_| AppError::BadClientData("Invalid upload metadata".into()))?;
            metadata = Some(
                serde_json::from_str(&raw)
                    .map_err(|_| AppError::BadClientData("Invalid upload metadata".into()))?,
            );
        } else if field_name.starts_with("file") {
            let original_name = content_disposition
                .as_ref()
                .and_then(|cd| cd.get_filename())
                .unwrap_or("unnamed")
                .to_string();
            files.push(IncomingFile {
                original_name,
                mime_type,
                bytes,
            });
        }
    }

    let metadata = metadata
        .ok_or_else(|| AppError::BadClientData("Missing upload metadata".into()))?;

    let usecase = UploadFilesUseCase { metadata, files };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            // 207 when some files made it to storage and others did not
            let all_uploaded = res.errors.is_empty();
            let mut builder = if all_uploaded {
                HttpResponse::Ok()
            } else {
                HttpResponse::MultiStatus()
            };
            builder.json(APIResponse {
                success: !res.files.is_empty(),
                message: format!("{} file(s) uploaded successfully", res.files.len()),
                total_files: res.files.len() + res.errors.len(),
                success_count: res.files.len(),
                error_count: res.errors.len(),
                files: res.files,
                errors: res.errors,
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct UploadFilesUseCase {
    pub metadata: UploadMetadata,
    pub files: Vec<IncomingFile>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub files: Vec<UploadedFileDTO>,
    pub errors: Vec<UploadErrorDTO>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoFiles,
    TooManyFiles,
    ValidationFailed(Vec<String>),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoFiles => Self::BadClientData("No files provided".into()),
            UseCaseError::TooManyFiles => Self::BadClientData(format!(
                "Maximum {} files per upload batch",
                MAX_FILES_PER_BATCH
            )),
            UseCaseError::ValidationFailed(errors) => Self::FileValidationFailed(errors),
        }
    }
}

impl UploadFilesUseCase {
    /// projects/{id}/{category}/ style prefix from whatever metadata the
    /// client supplied.
    fn folder_path(&self) -> String {
        let mut segments = Vec::new();
        if let Some(project_id) = &self.metadata.project_id {
            segments.push(format!("projects/{}", project_id));
        }
        if let Some(work_entry_id) = &self.metadata.work_entry_id {
            segments.push(format!("work-entries/{}", work_entry_id));
        }
        if let Some(user_id) = &self.metadata.user_id {
            segments.push(format!("users/{}", user_id));
        }
        if let Some(report_type) = &self.metadata.report_type {
            segments.push(report_type.clone());
        }
        if let Some(category) = &self.metadata.category {
            segments.push(category.clone());
        }
        if segments.is_empty() {
            String::new()
        } else {
            format!("{}/", segments.join("/"))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UploadFilesUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "UploadFiles";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.files.is_empty() {
            return Err(UseCaseError::NoFiles);
        }
        if self.files.len() > MAX_FILES_PER_BATCH {
            return Err(UseCaseError::TooManyFiles);
        }

        // Every file must pass the bucket policy before anything is sent
        // to the store.
        let policy = self.metadata.bucket.policy();
        let mut validation_errors = Vec::new();
        for file in &self.files {
            if let Err(errors) =
                policy.validate_file(&file.original_name, &file.mime_type, file.bytes.len())
            {
                validation_errors.extend(errors);
            }
        }
        if !validation_errors.is_empty() {
            return Err(UseCaseError::ValidationFailed(validation_errors));
        }

        let bucket_name = ctx.config.bucket_name(self.metadata.bucket);
        let folder_path = self.folder_path();
        let mut uploaded = Vec::new();
        let mut upload_errors = Vec::new();

        for file in &self.files {
            let file_name = create_secure_file_name(&file.original_name);
            let path = format!("{}{}", folder_path, file_name);
            match ctx
                .storage
                .upload(&bucket_name, &path, &file.mime_type, file.bytes.clone())
                .await
            {
                Ok(_) => uploaded.push(UploadedFileDTO {
                    file_name,
                    original_name: file.original_name.clone(),
                    size: file.bytes.len(),
                    r#type: file.mime_type.clone(),
                    url: ctx.storage.public_url(&bucket_name, &path),
                    path,
                    bucket: bucket_name.clone(),
                }),
                Err(e) => {
                    error!("Error uploading file {}: {:?}", file.original_name, e);
                    upload_errors.push(UploadErrorDTO {
                        file_name: file.original_name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(UseCaseResponse {
            files: uploaded,
            errors: upload_errors,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::StorageBucket;

    fn generate_file(name: &str, mime_type: &str, size: usize) -> IncomingFile {
        IncomingFile {
            original_name: name.into(),
            mime_type: mime_type.into(),
            bytes: vec![0; size],
        }
    }

    fn generate_metadata() -> UploadMetadata {
        UploadMetadata {
            bucket: StorageBucket::ProjectPhotos,
            project_id: None,
            user_id: None,
            work_entry_id: None,
            report_type: None,
            category: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn rejects_batches_over_the_limit() {
        let ctx = Context::create_inmemory();
        let mut usecase = UploadFilesUseCase {
            metadata: generate_metadata(),
            files: (0..6)
                .map(|i| generate_file(&format!("photo-{}.png", i), "image/png", 100))
                .collect(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::TooManyFiles
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_foreign_mime_type_before_any_upload() {
        let ctx = Context::create_inmemory();
        let mut usecase = UploadFilesUseCase {
            metadata: generate_metadata(),
            files: vec![
                generate_file("a.png", "image/png", 100),
                generate_file("b.pdf", "application/pdf", 100),
            ],
        };
        let err = usecase.execute(&ctx).await.unwrap_err();
        match err {
            UseCaseError::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("b.pdf"));
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
        // nothing reached the store
        assert!(ctx.storage.list("project-photos", "", 100).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn uploads_valid_batch_with_folder_prefix() {
        let ctx = Context::create_inmemory();
        let project_id = bauhub_domain::ID::default();
        let mut metadata = generate_metadata();
        metadata.project_id = Some(project_id.clone());
        metadata.category = Some("before".into());
        let mut usecase = UploadFilesUseCase {
            metadata,
            files: vec![generate_file("site.png", "image/png", 512)],
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.files.len(), 1);
        assert!(res.errors.is_empty());
        assert!(res.files[0]
            .path
            .starts_with(&format!("projects/{}/before/", project_id)));
        assert!(res.files[0].file_name.ends_with("site.png"));
    }
}

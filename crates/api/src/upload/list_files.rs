use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::StoredFileDTO;
use bauhub_api_structs::list_files::*;
use bauhub_domain::StorageBucket;
use bauhub_infra::Context;

const DEFAULT_LIST_LIMIT: usize = 50;

pub async fn list_files_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let bucket: StorageBucket = query_params
        .bucket
        .parse()
        .map_err(|_| AppError::BadClientData("Invalid bucket name".into()))?;
    let usecase = ListFilesUseCase {
        bucket,
        path: query_params.path.clone().unwrap_or_default(),
        limit: query_params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct ListFilesUseCase {
    pub bucket: StorageBucket,
    pub path: String,
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListFilesUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ListFiles";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let bucket_name = ctx.config.bucket_name(self.bucket);
        let objects = ctx
            .storage
            .list(&bucket_name, &self.path, self.limit)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let files: Vec<StoredFileDTO> = objects
            .into_iter()
            .map(|o| StoredFileDTO {
                name: o.name,
                path: o.path,
                size: o.size,
                r#type: o.mime_type,
            })
            .collect();

        Ok(APIResponse {
            bucket: bucket_name,
            path: self.path.clone(),
            total: files.len(),
            files,
        })
    }
}

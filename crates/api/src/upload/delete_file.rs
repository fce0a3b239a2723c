use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::delete_file::*;
use bauhub_domain::StorageBucket;
use bauhub_infra::Context;

pub async fn delete_file_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let bucket: StorageBucket = query_params
        .bucket
        .parse()
        .map_err(|_| AppError::BadClientData("Invalid bucket name".into()))?;
    if query_params.path.trim().is_empty() {
        return Err(AppError::BadClientData("File path is required".into()));
    }
    let usecase = DeleteFileUseCase {
        bucket,
        path: query_params.path.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct DeleteFileUseCase {
    pub bucket: StorageBucket,
    pub path: String,
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
impl UseCase for DeleteFileUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteFile";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let bucket_name = ctx.config.bucket_name(self.bucket);
        ctx.storage
            .remove(&bucket_name, &self.path)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(APIResponse {
            success: true,
            message: format!("File deleted successfully: {}", self.path),
            bucket: bucket_name,
            path: self.path.clone(),
        })
    }
}

use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::create_project_document::*;
use bauhub_api_structs::dtos::DocumentEntryDTO;
use bauhub_domain::{Document, ID};
use bauhub_infra::Context;

pub async fn create_project_document_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = CreateProjectDocumentUseCase {
        project_id: path_params.project_id.clone(),
        filename: body.filename,
        original_filename: body.original_filename,
        file_type: body.file_type.unwrap_or_default(),
        file_size: body.file_size.unwrap_or(0),
        document_type: body.document_type.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        uploaded_by: body.uploaded_by,
    };

    execute(usecase, &ctx)
        .await
        .map(|document| {
            HttpResponse::Created().json(APIResponse {
                document: DocumentEntryDTO::from_document(document, None, None),
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateProjectDocumentUseCase {
    pub project_id: ID,
    pub filename: String,
    pub original_filename: Option<String>,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: String,
    pub description: String,
    pub uploaded_by: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFilename,
    ProjectNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFilename => {
                Self::BadClientData("Document filename is required".into())
            }
            UseCaseError::ProjectNotFound(project_id) => Self::NotFound(format!(
                "The project with id: {}, was not found.",
                project_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateProjectDocumentUseCase {
    type Response = Document;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateProjectDocument";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.filename.trim().is_empty() {
            return Err(UseCaseError::MissingFilename);
        }
        if ctx.repos.projects.find(&self.project_id).await.is_none() {
            return Err(UseCaseError::ProjectNotFound(self.project_id.clone()));
        }

        let document = Document {
            id: Default::default(),
            project_id: self.project_id.clone(),
            filename: self.filename.clone(),
            original_filename: self
                .original_filename
                .clone()
                .unwrap_or_else(|| self.filename.clone()),
            file_type: self.file_type.clone(),
            file_size: self.file_size,
            document_type: self.document_type.clone(),
            description: self.description.clone(),
            uploaded_by: self.uploaded_by.clone(),
            upload_date: ctx.sys.get_timestamp_millis(),
            is_active: true,
        };
        ctx.repos
            .documents
            .insert(&document)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(document)
    }
}

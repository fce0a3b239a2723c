use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::DocumentEntryDTO;
use bauhub_api_structs::get_project_documents::*;
use bauhub_api_structs::PaginationParams;
use bauhub_domain::ID;
use bauhub_infra::Context;

pub async fn get_project_documents_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let pagination = PaginationParams::parse(query_params.page, query_params.per_page);
    let usecase = GetProjectDocumentsUseCase {
        project_id: path_params.project_id.clone(),
        pagination,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                items: res.items,
                total: res.total,
                page: pagination.page,
                per_page: pagination.per_page,
                total_pages: pagination.total_pages(res.total),
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetProjectDocumentsUseCase {
    pub project_id: ID,
    pub pagination: PaginationParams,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub items: Vec<DocumentEntryDTO>,
    pub total: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(project_id) => Self::NotFound(format!(
                "The project with id: {}, was not found.",
                project_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProjectDocumentsUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProjectDocuments";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx.repos.projects.find(&self.project_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.project_id.clone()));
        }

        let documents = ctx
            .repos
            .documents
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let plans = ctx
            .repos
            .project_plans
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut items = Vec::with_capacity(documents.len() + plans.len());
        for document in documents {
            let uploader = match &document.uploaded_by {
                Some(user_id) => ctx.repos.users.find(user_id).await,
                None => None,
            };
            items.push(DocumentEntryDTO::from_document(
                document,
                uploader.as_ref().map(|u| u.full_name()),
                uploader.map(|u| u.email),
            ));
        }
        items.extend(plans.into_iter().map(DocumentEntryDTO::from_plan));
        items.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(self.pagination.offset().max(0) as usize)
            .take(self.pagination.per_page as usize)
            .collect();

        Ok(UseCaseResponse { items, total })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{Document, Project, ProjectPlan};

    #[actix_web::main]
    #[test]
    async fn merges_documents_and_plans() {
        let ctx = Context::create_inmemory();
        let project = Project {
            id: Default::default(),
            name: "Fiber rollout north".into(),
            city: "Leipzig".into(),
            status: Default::default(),
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        ctx.repos
            .documents
            .insert(&Document {
                id: Default::default(),
                project_id: project.id.clone(),
                filename: "permit.pdf".into(),
                original_filename: "Genehmigung.pdf".into(),
                file_type: "application/pdf".into(),
                file_size: 1024,
                document_type: "permit".into(),
                description: String::new(),
                uploaded_by: None,
                upload_date: 200,
                is_active: true,
            })
            .await
            .unwrap();
        ctx.repos
            .project_plans
            .insert(&ProjectPlan {
                id: Default::default(),
                project_id: project.id.clone(),
                filename: "trench-plan.dwg".into(),
                plan_type: "layout".into(),
                file_size: 2048,
                description: String::new(),
                created_at: 100,
            })
            .await
            .unwrap();

        let mut usecase = GetProjectDocumentsUseCase {
            project_id: project.id.clone(),
            pagination: PaginationParams::parse(None, None),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.total, 2);
        assert_eq!(res.items[0].source, "documents");
        assert_eq!(res.items[0].file_name, "Genehmigung.pdf");
        assert_eq!(res.items[1].source, "project_plans");
        assert_eq!(res.items[1].document_type, "plan");
    }

    #[actix_web::main]
    #[test]
    async fn unknown_project_is_not_found() {
        let ctx = Context::create_inmemory();
        let mut usecase = GetProjectDocumentsUseCase {
            project_id: ID::default(),
            pagination: PaginationParams::parse(None, None),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}

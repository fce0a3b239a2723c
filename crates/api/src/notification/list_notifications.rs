use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::{NotificationDTO, NotificationSummaryDTO};
use bauhub_api_structs::list_notifications::*;
use bauhub_api_structs::PaginationParams;
use bauhub_domain::{Notification, NotificationPriority, ID};
use bauhub_infra::{Context, NotificationFilters, NotificationSummary, PageQuery};

pub async fn list_notifications_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let pagination = PaginationParams::parse(query_params.page, query_params.per_page);
    let usecase = ListNotificationsUseCase {
        user_id: query_params.user_id.clone(),
        read: query_params.read,
        priority: query_params.priority,
        created_after: query_params.created_after,
        pagination,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                items: res.items.into_iter().map(NotificationDTO::new).collect(),
                total: res.total,
                page: pagination.page,
                per_page: pagination.per_page,
                total_pages: pagination.total_pages(res.total),
                summary: NotificationSummaryDTO {
                    total_count: res.summary.total_count,
                    unread_count: res.summary.unread_count,
                    urgent_count: res.summary.urgent_count,
                },
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct ListNotificationsUseCase {
    pub user_id: Option<ID>,
    pub read: Option<bool>,
    pub priority: Option<NotificationPriority>,
    pub created_after: Option<i64>,
    pub pagination: PaginationParams,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub items: Vec<Notification>,
    pub total: i64,
    pub summary: NotificationSummary,
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
impl UseCase for ListNotificationsUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ListNotifications";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let filters = NotificationFilters {
            user_id: self.user_id.clone(),
            is_read: self.read,
            priority: self.priority,
            created_after: self.created_after,
        };
        let page = PageQuery {
            offset: self.pagination.offset(),
            limit: self.pagination.per_page,
        };

        let (items, total) = ctx
            .repos
            .notifications
            .list(&filters, page)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let summary = ctx
            .repos
            .notifications
            .summary(self.user_id.as_ref())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseResponse {
            items,
            total,
            summary,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn filters_by_user_and_counts_unread() {
        let ctx = Context::create_inmemory();
        let user_a = ID::default();
        let user_b = ID::default();
        for (user, read) in [(&user_a, false), (&user_a, true), (&user_b, false)].iter() {
            let mut notification = Notification::new(
                (*user).clone(),
                "Wartung heute fällig: Bagger".into(),
                "Wartung".into(),
                10,
            );
            notification.is_read = *read;
            ctx.repos.notifications.insert(&notification).await.unwrap();
        }

        let mut usecase = ListNotificationsUseCase {
            user_id: Some(user_a.clone()),
            read: Some(false),
            priority: None,
            created_after: None,
            pagination: PaginationParams::parse(None, None),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.total, 1);
        assert_eq!(res.summary.total_count, 2);
        assert_eq!(res.summary.unread_count, 1);
    }
}

use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::mark_notification_read::*;
use bauhub_domain::{Notification, ID};
use bauhub_infra::Context;

pub async fn mark_notification_read_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = MarkNotificationReadUseCase {
        notification_id: body.notification_id,
        read: body.read.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Ok().json(APIResponse::new(notification)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
    pub notification_id: ID,
    pub read: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(notification_id) => Self::NotFound(format!(
                "The notification with id: {}, was not found.",
                notification_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkNotificationReadUseCase {
    type Response = Notification;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkNotificationRead";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let read_at = if self.read {
            Some(ctx.sys.get_timestamp_millis())
        } else {
            None
        };
        ctx.repos
            .notifications
            .set_read(&self.notification_id, self.read, read_at)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.notification_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn marks_and_unmarks() {
        let ctx = Context::create_inmemory();
        let notification = Notification::new(ID::default(), "Titel".into(), "Text".into(), 5);
        ctx.repos.notifications.insert(&notification).await.unwrap();

        let mut usecase = MarkNotificationReadUseCase {
            notification_id: notification.id.clone(),
            read: true,
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(updated.is_read);
        assert!(updated.read_at.is_some());

        let mut usecase = MarkNotificationReadUseCase {
            notification_id: notification.id.clone(),
            read: false,
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(!updated.is_read);
        assert!(updated.read_at.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn unknown_notification_is_not_found() {
        let ctx = Context::create_inmemory();
        let mut usecase = MarkNotificationReadUseCase {
            notification_id: ID::default(),
            read: true,
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}

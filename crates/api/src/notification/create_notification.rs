use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::create_notification::*;
use bauhub_domain::{Notification, NotificationPriority, NotificationType, ID};
use bauhub_infra::Context;

// Manually created notifications disappear after a month unless the
// client says otherwise.
const DEFAULT_EXPIRY_DAYS: i64 = 30;

pub async fn create_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = CreateNotificationUseCase {
        user_id: body.user_id,
        title: body.title,
        message: body.message,
        notification_type: body.r#type.unwrap_or_default(),
        priority: body.priority.unwrap_or_default(),
        action_url: body.action_url,
        action_label: body.action_label,
        data: body.data.unwrap_or(serde_json::Value::Null),
        expires_at: body.expires_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Created().json(APIResponse::new(notification)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateNotificationUseCase {
    pub user_id: ID,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub action_url: Option<String>,
    pub action_label: Option<String>,
    pub data: serde_json::Value,
    pub expires_at: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFields,
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => {
                Self::BadClientData("Title and message are required".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNotificationUseCase {
    type Response = Notification;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateNotification";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.title.trim().is_empty() || self.message.trim().is_empty() {
            return Err(UseCaseError::MissingFields);
        }

        let now = ctx.sys.get_timestamp_millis();
        let mut notification = Notification::new(
            self.user_id.clone(),
            self.title.clone(),
            self.message.clone(),
            now,
        );
        notification.notification_type = self.notification_type;
        notification.priority = self.priority;
        notification.action_url = self.action_url.clone();
        notification.action_label = self.action_label.clone();
        notification.data = self.data.clone();
        notification.expires_at = Some(
            self.expires_at
                .unwrap_or(now + DEFAULT_EXPIRY_DAYS * 24 * 60 * 60 * 1000),
        );

        ctx.repos
            .notifications
            .insert(&notification)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(notification)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn rejects_missing_title() {
        let ctx = Context::create_inmemory();
        let mut usecase = CreateNotificationUseCase {
            user_id: ID::default(),
            title: String::new(),
            message: "Hello".into(),
            notification_type: Default::default(),
            priority: Default::default(),
            action_url: None,
            action_label: None,
            data: serde_json::Value::Null,
            expires_at: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::MissingFields
        );
    }

    #[actix_web::main]
    #[test]
    async fn defaults_expiry_to_thirty_days() {
        let ctx = Context::create_inmemory();
        let mut usecase = CreateNotificationUseCase {
            user_id: ID::default(),
            title: "Niedriger Bestand: Kabel".into(),
            message: "Bestand unter Meldegrenze.".into(),
            notification_type: Default::default(),
            priority: Default::default(),
            action_url: None,
            action_label: None,
            data: serde_json::Value::Null,
            expires_at: None,
        };
        let notification = usecase.execute(&ctx).await.unwrap();
        let expires_at = notification.expires_at.unwrap();
        assert_eq!(
            expires_at - notification.created_at,
            DEFAULT_EXPIRY_DAYS * 24 * 60 * 60 * 1000
        );
    }
}

use axum::{
    Json,
    extract::{Form, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::item::NewItem;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::auth::MessageResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ItemForm {
    pub(crate) name: String,
    pub(crate) value: String,
}

#[utoipa::path(
    post,
    path = "/add",
    tag = "items",
    request_body(content = ItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Item stored", body = MessageResponse)
    )
)]
pub(crate) async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> AppResult<Json<MessageResponse>> {
    state
        .item_service
        .add_item(NewItem {
            name: form.name,
            value: form.value,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Запись добавлена".to_string(),
    }))
}

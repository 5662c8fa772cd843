//! Order handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus, OrderUpdate, UserId};
use crate::error::AppError;
use crate::AppState;

/// Request to place an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    /// Defaults to `pending`
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to update an order
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    /// Omit to keep the current owner
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Defaults to `completed`
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.to_rfc3339(),
        }
    }
}

/// Parse an optional status. Absent or blank means "use the default".
fn parse_status(status: Option<String>) -> Result<Option<OrderStatus>, AppError> {
    match status.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(AppError::BadRequest),
    }
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = state
        .order_service
        .create_order(NewOrder {
            user_id: UserId(request.user_id),
            status: parse_status(request.status)?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.get_order_by_id(&OrderId(id)).await?;

    Ok(Json(order.into()))
}

/// PUT /orders/:id
///
/// A request without a JSON body is an absent update and is answered with
/// 404. A JSON body that does not decode is a 400.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let update = match request {
        Ok(Json(request)) => Some(OrderUpdate {
            id: OrderId(id),
            user_id: request.user_id.map(UserId),
            status: parse_status(request.status)?,
        }),
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };

    let order = state.order_service.update_order(update).await?;

    Ok(Json(order.into()))
}

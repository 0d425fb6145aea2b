//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::auth::{CurrentUser, gate};
use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderResponse, OrderStatus};
use crate::db::repository::OrderRepository;
use crate::orders::{can_transition_to, sort_for_fulfilment};
use crate::utils::AppResult;
use crate::utils::validation::validate_non_negative;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Serialize)]
pub struct OrderMutationResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListResponse {
    pub orders: Vec<OrderResponse>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Status payload taken as a plain string so an unrecognized value maps to
/// the domain's own 400 instead of a serde rejection
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// POST /api/orders - 下单 (需登录)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderMutationResponse>)> {
    if payload.items.is_empty() {
        return Err(AppError::validation(
            "Order must contain at least one item.",
        ));
    }
    validate_non_negative(payload.total, "Total")?;
    for item in &payload.items {
        validate_non_negative(item.unit_price, "Item price")?;
        if item.quantity <= 0 {
            return Err(AppError::validation("Item quantity must be positive."));
        }
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(&user.id, payload).await?;

    tracing::info!(
        order_id = %order.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        user_id = %user.id,
        total = order.total,
        "Order placed"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderMutationResponse {
            message: "Order placed successfully.".to_string(),
            order: order.into(),
        }),
    ))
}

/// GET /api/orders/user - 当前用户的订单 (按时间倒序)
pub async fn list_own(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_owner(&user.id).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// GET /api/orders - 全部订单 (管理员, 按履约优先级排序后分页)
pub async fn admin_list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<AdminListQuery>,
) -> AppResult<Json<AdminListResponse>> {
    gate::require_admin(&user)?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let repo = OrderRepository::new(state.db.clone());
    let mut orders = repo.find_all().await?;

    // Sort the whole set, then slice the page: the status-priority key is
    // a business rule, not a query
    sort_for_fulfilment(&mut orders);

    let total_pages = orders.len().div_ceil(limit);
    let skip = (page - 1) * limit;
    let page_orders: Vec<OrderResponse> = orders
        .into_iter()
        .skip(skip)
        .take(limit)
        .map(OrderResponse::from)
        .collect();

    Ok(Json(AdminListResponse {
        orders: page_orders,
        current_page: page,
        total_pages,
    }))
}

/// PATCH /api/orders/:id - 管理员改状态 (无转移图检查, 幂等)
pub async fn admin_set_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<OrderMutationResponse>> {
    gate::require_admin(&user)?;

    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::validation("Invalid status."))?;

    let repo = OrderRepository::new(state.db.clone());

    if repo.find_by_id(&id).await?.is_none() {
        return Err(AppError::not_found("Order not found."));
    }

    let order = repo.set_status(&id, status).await?;

    tracing::info!(order_id = %id, status = %status, "Order status updated by admin");

    Ok(Json(OrderMutationResponse {
        message: "Order status updated.".to_string(),
        order: order.into(),
    }))
}

/// PATCH /api/orders/user/:id - 买家确认收货 (仅所有者, 仅 Shipped)
pub async fn mark_delivered(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<OrderMutationResponse>> {
    let repo = OrderRepository::new(state.db.clone());

    // A missing order answers exactly like a foreign one, so ids cannot
    // be probed
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::forbidden("Access denied: Not your order."))?;

    gate::require_owner(&user, &order.user_id)?;

    if !can_transition_to(order.status, OrderStatus::Delivered) {
        return Err(AppError::validation(
            "Order must be shipped before it can be delivered.",
        ));
    }

    // Conditional update: a racing confirmation loses here, not after
    let order = repo.mark_delivered(&id).await?.ok_or_else(|| {
        AppError::validation("Order must be shipped before it can be delivered.")
    })?;

    tracing::info!(order_id = %id, user_id = %user.id, "Order marked delivered");

    Ok(Json(OrderMutationResponse {
        message: "Order marked as delivered.".to_string(),
        order: order.into(),
    }))
}

//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::auth::{CurrentUser, gate};
use crate::core::ServerState;
use crate::db::models::{ProductCreate, ProductResponse, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, validate_non_negative, validate_optional_text, validate_product_name,
    validate_stock,
};

const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: i64,
}

fn validate_create(payload: &ProductCreate) -> Result<(), AppError> {
    validate_product_name(&payload.name)?;
    validate_non_negative(payload.price, "Price")?;
    validate_stock(payload.stock)?;
    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;
    Ok(())
}

fn validate_update(payload: &ProductUpdate) -> Result<(), AppError> {
    if let Some(name) = &payload.name {
        validate_product_name(name)?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "Price")?;
    }
    if let Some(stock) = payload.stock {
        validate_stock(stock)?;
    }
    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;
    Ok(())
}

/// GET /api/products - 分页获取商品列表 (公共)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_page(page, limit, query.featured).await?;
    let total = repo.count(query.featured).await?;

    let total_pages = (total as u64).div_ceil(limit);

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
        current_page: page,
        total_pages,
        total_products: total,
    }))
}

/// GET /api/products/:id - 获取单个商品 (公共)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found."))?;

    Ok(Json(ProductResponse::from(product)))
}

/// POST /api/products - 创建商品 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    gate::require_admin(&user)?;
    validate_create(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;

    tracing::info!(
        product_id = %product.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        name = %product.name,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PUT /api/products/:id - 更新商品 (管理员)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductResponse>> {
    gate::require_admin(&user)?;
    validate_update(&payload)?;

    let repo = ProductRepository::new(state.db.clone());

    // 404 before 200: distinguish a bad id from an empty patch
    if repo.find_by_id(&id).await?.is_none() {
        return Err(AppError::not_found("Product not found."));
    }

    let product = repo.update(&id, payload).await?;

    tracing::info!(product_id = %id, "Product updated");

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/:id - 删除商品 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    gate::require_admin(&user)?;

    let repo = ProductRepository::new(state.db.clone());
    if repo.find_by_id(&id).await?.is_none() {
        return Err(AppError::not_found("Product not found."));
    }
    repo.delete(&id).await?;

    tracing::info!(product_id = %id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

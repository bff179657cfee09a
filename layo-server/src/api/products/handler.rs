//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::form::ProductSubmission;
use crate::api::JsonFields;
use crate::auth::Credentials;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate};
use crate::db::repository::{ProductRepository, Repository};
use crate::services::StoredMedia;
use crate::utils::validation::{Fields, optional_media_type, required_number, required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
}

fn validate_product(fields: &Fields) -> AppResult<ProductCreate> {
    Ok(ProductCreate {
        name: required_text(fields, "name")?,
        price: required_number(fields, "price")?,
        description: required_text(fields, "description")?,
        category: required_text(fields, "category")?,
        media: None,
        media_type: optional_media_type(fields)?,
    })
}

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list products");
        AppError::new(ErrorCode::DatabaseError)
    })?;
    Ok(Json(products))
}

/// POST /api/products - 创建商品 (JSON 或 multipart)
///
/// media 已在解析阶段筛选；认证与字段校验通过后才写文件，写库失败时删除该文件。
pub async fn create(
    State(state): State<ServerState>,
    submission: ProductSubmission,
) -> AppResult<Json<ProductCreated>> {
    let ProductSubmission { fields, media } = submission;

    let seller = state
        .authenticator
        .authenticate(&Credentials::from_fields(&fields))
        .await?;

    let mut data = validate_product(&fields)?;

    let stored: Option<StoredMedia> = match &media {
        Some(upload) => Some(state.media.save(upload).await?),
        None => None,
    };
    data.media = stored.as_ref().map(StoredMedia::url);

    let repo = ProductRepository::new(state.db.clone());
    match repo.create(data).await {
        Ok(product) => {
            tracing::info!(
                product_id = %product.id,
                seller = %seller.username(),
                media = ?product.media,
                "Product created"
            );
            Ok(Json(ProductCreated {
                success: true,
                product,
            }))
        }
        Err(e) => {
            if let Some(stored) = &stored {
                state.media.remove(stored).await;
            }
            Err(AppError::storage_rejected(e.to_string()))
        }
    }
}

/// DELETE /api/products/{id} - 删除商品
///
/// 不存在的 id 同样返回成功
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonFields(fields): JsonFields,
) -> AppResult<Json<Deleted>> {
    let seller = state
        .authenticator
        .authenticate(&Credentials::from_fields(&fields))
        .await?;

    let repo = ProductRepository::new(state.db.clone());
    repo.delete(&id)
        .await
        .map_err(|e| AppError::storage_rejected(e.to_string()))?;

    tracing::info!(product_id = %id, seller = %seller.username(), "Product deleted");
    Ok(Json(Deleted { success: true }))
}

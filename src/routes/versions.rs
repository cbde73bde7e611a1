//! # 버전 이력 라우트 핸들러
//!
//! 상세 화면의 "수정 이력 / 복구" 기능을 담당합니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/recipes/{title}/versions`           → 제목의 전체 이력 (버전 오름차순)
//! - `GET /api/v1/recipes/{title}/versions/{version}` → 특정 버전 조회 (복구 선택)
//!
//! 복구는 **읽기 연산**입니다. 과거 버전을 가져와 현재 보기/편집 대상으로
//! 삼을 뿐, 새 버전을 만들지도 저장소를 바꾸지도 않습니다. 복구해 둔
//! 내용을 실제로 저장하는 순간에야 `PUT /recipes/{title}`을 타고
//! 최댓값 + 1 버전이 새로 추가됩니다.

use crate::{error::AppError, middleware::auth::AuthUser, services, store};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::recipes::AppState;

/// `GET /recipes/{title}/versions` — 제목의 전체 이력.
///
/// 복구 목록 표시용이므로 버전 오름차순으로 정렬되어 나갑니다.
/// 이력이 없는 제목이면 404.
pub async fn list_recipe_versions(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(title): Path<String>,
) -> Result<Json<Value>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    let history = services::history_for_title(&collection, &title);
    if history.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({ "versions": history })))
}

/// `GET /recipes/{title}/versions/{version}` — 복구 선택.
///
/// (제목, 버전) 쌍이 이력에 없으면 404, 있으면 그 스냅샷 그대로.
pub async fn get_recipe_version(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((title, version)): Path<(String, i64)>,
) -> Result<Json<crate::models::RecipeVersion>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    let selected = services::find_version(&collection, &title, version)
        .cloned()
        .ok_or(AppError::NotFound)?;

    Ok(Json(selected))
}

//! # 레시피 라우트 핸들러
//!
//! 편집 워크플로우의 서버 쪽 절반입니다. 화면의 보기(Viewing)/편집(Editing)
//! 상태는 클라이언트가 들고 있고, 여기서는 그 전이에 대응하는 연산을
//! 처리합니다. 편집 취소는 요청이 오지 않으므로 핸들러가 없습니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1/recipes`          → 제목별 최신 버전 목록
//! - `POST   /api/v1/recipes`          → 레시피 저장 (새 버전 주조)
//! - `GET    /api/v1/recipes/{title}`  → 해당 제목의 최신 버전 (상세 보기)
//! - `PUT    /api/v1/recipes/{title}`  → 수정 저장 (이력에 버전 추가)
//! - `DELETE /api/v1/recipes/{title}`  → 해당 제목의 모든 버전 삭제
//!
//! ## 처리 흐름
//! 모든 쓰기 연산은 같은 골격을 탑니다:
//! 읽기(스토어 어댑터) → 계산(버전 엔진, 순수 함수) → 쓰기(어댑터 전체 교체).
//! 읽기-계산-쓰기 사이에 잠금이 없으므로 같은 identity로 두 실행 흐름이
//! 겹치면 나중 저장이 이깁니다. 단일 사용자 서비스에서 받아들인 한계입니다.
//!
//! ## Axum 핸들러 패턴
//! 핸들러는 **Extractor**를 매개변수로 받습니다:
//! - `State(state)`: 앱 전역 상태 (저장소, JWT 비밀키)
//! - `auth_user`: Bearer 토큰에서 검증/추출된 identity — 이 매개변수가
//!   있는 핸들러는 로그인 없이는 절대 실행되지 않습니다
//! - `Path(title)`: URL 경로 파라미터 (percent-encoding은 Axum이 풀어줌)
//! - `Json(req)`: 요청 본문을 구조체로 파싱
//!
//! 반환 타입이 `Result<T, AppError>`이므로 에러는 자동으로
//! 적절한 상태 코드의 JSON 응답이 됩니다.

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    models::{RecipeContentRequest, RecipeVersion, SaveRecipeRequest},
    services,
    store,
    store::kv::KeyValueStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// 애플리케이션 공유 상태.
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소는 트레이트 객체로 주입되므로 핸들러는 매체가 SQLite인지
/// 메모리인지 모릅니다.
#[derive(Clone)]
pub struct AppState {
    /// key-value 저장소 (Arc로 공유)
    pub store: Arc<dyn KeyValueStore>,
    /// JWT 서명 검증용 비밀키 (외부 인증 계층과 공유)
    pub jwt_secret: String,
}

/// 버전에 찍을 저장 시각. UTC, 밀리초 정밀도.
fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// `GET /recipes` — 제목별 최신 버전 목록을 돌려줍니다.
///
/// 각 항목은 RecipeVersion 전체입니다. 목록에서 상세 화면으로 넘어갈 때
/// 클라이언트가 저장소를 다시 읽지 않고 이 값을 그대로 들고 가기
/// 때문입니다 (이력/복구 목록만 상세 화면이 따로 요청합니다).
pub async fn list_recipes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    let recipes = services::latest_per_title(&collection);
    Ok(Json(json!({ "recipes": recipes })))
}

/// `GET /recipes/{title}` — 해당 제목의 최신 버전을 돌려줍니다.
///
/// 이력이 하나도 없는 제목이면 404.
pub async fn get_recipe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(title): Path<String>,
) -> Result<Json<RecipeVersion>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    // 이력의 마지막 = 버전 오름차순 정렬 후 끝 = 최신
    let latest = services::history_for_title(&collection, &title)
        .pop()
        .ok_or(AppError::NotFound)?;
    Ok(Json(latest))
}

/// `POST /recipes` — 레시피를 저장합니다.
///
/// 새 제목이면 버전 1, 이미 있는 제목이면 기존 최댓값 + 1이 됩니다.
/// 검증에 실패하면 저장소는 그대로이고 400과 함께 문제 필드 이름이
/// 돌아갑니다 (클라이언트는 편집 상태에 머뭅니다).
pub async fn create_recipe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<SaveRecipeRequest>,
) -> Result<Json<RecipeVersion>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    let (next, minted) = services::append_version(&collection, &req, now_timestamp())?;
    store::save_collection(state.store.as_ref(), &auth_user.identity, &next).await?;
    Ok(Json(minted))
}

/// `PUT /recipes/{title}` — 수정 내용을 새 버전으로 저장합니다.
///
/// 존재하지 않는 제목의 수정은 404입니다 (편집은 보기 화면에서만
/// 진입할 수 있으므로). 이전 버전들은 전부 이력에 그대로 남습니다.
/// 옛 버전을 복구해 둔 상태에서 저장해도 버전은 복구된 번호 + 1이
/// 아니라 최댓값 + 1입니다.
pub async fn update_recipe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(title): Path<String>,
    Json(req): Json<RecipeContentRequest>,
) -> Result<Json<RecipeVersion>, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    if !collection.iter().any(|entry| entry.title == title) {
        // 이 제목으로 저장된 버전이 하나도 없다
        return Err(AppError::NotFound);
    }

    let draft = SaveRecipeRequest {
        title,
        tags: req.tags,
        ingredients: req.ingredients,
        steps: req.steps,
    };
    let (next, minted) = services::append_version(&collection, &draft, now_timestamp())?;
    store::save_collection(state.store.as_ref(), &auth_user.identity, &next).await?;
    Ok(Json(minted))
}

/// `DELETE /recipes/{title}` — 해당 제목의 모든 버전을 지웁니다.
///
/// 제목에 대한 종결 연산입니다. 이력까지 전부, 되돌릴 수 없이
/// 사라집니다. 성공 시 204 No Content.
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(title): Path<String>,
) -> Result<StatusCode, AppError> {
    let collection = store::load_collection(state.store.as_ref(), &auth_user.identity).await?;
    let remaining = services::without_title(&collection, &title);
    if remaining.len() == collection.len() {
        return Err(AppError::NotFound);
    }

    store::save_collection(state.store.as_ref(), &auth_user.identity, &remaining).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! # 레시피 모델 정의
//!
//! 이 서비스의 유일한 엔티티는 `RecipeVersion`입니다.
//! 레시피는 제자리에서 수정되지 않습니다 — 저장할 때마다 같은 제목 아래에
//! 새로운 불변 버전이 하나 추가되고, 이전 버전들은 이력으로 남습니다.
//!
//! ## 구조체 역할
//! - `RecipeVersion`: 저장 페이로드와 API 응답 양쪽에 쓰이는 버전 스냅샷
//! - `SaveRecipeRequest`: 새 레시피 저장 시 클라이언트가 보내는 JSON 본문
//! - `RecipeContentRequest`: 기존 레시피 수정 시 보내는 JSON 본문 (제목은 URL 경로에서)

use serde::{Deserialize, Serialize};

/// 레시피 한 버전의 불변 스냅샷.
///
/// `title`이 논리적 식별자이고, 같은 제목의 버전들은 `version` 값으로
/// 구분됩니다. (title, version) 쌍의 유일성은 스키마가 아니라
/// 버전 엔진의 읽기→계산→추가 프로토콜이 보장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeVersion {
    /// 레시피 제목. 컬렉션 안에서 유일하지 않으며 버전들을 묶는 키입니다.
    pub title: String,
    /// 분류용 태그 목록 (예: "매운맛", "국물요리")
    pub tags: Vec<String>,
    /// 재료 목록
    pub ingredients: Vec<String>,
    /// 조리 과정 목록 (순서대로)
    pub steps: Vec<String>,
    /// 1부터 시작하는 버전 번호. 같은 제목 안에서 저장할 때마다 정확히 1씩 증가합니다.
    pub version: i64,
    /// 저장 시각 (UTC, 저장 후 불변)
    pub created_at: String,
}

/// 레시피 저장 요청 — `POST /api/v1/recipes`의 요청 본문.
///
/// version과 created_at이 없는 이유: 버전 번호는 서버의 버전 엔진이
/// 기존 이력에서 계산하고, 타임스탬프는 저장 시점에 찍기 때문입니다.
/// 클라이언트가 보낸 값을 신뢰하면 이력의 불변식이 깨질 수 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRecipeRequest {
    pub title: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// 레시피 수정 요청 — `PUT /api/v1/recipes/{title}`의 요청 본문.
///
/// 수정 대상 제목은 URL 경로 파라미터에서 가져오므로 본문에는 내용만 담깁니다.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeContentRequest {
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

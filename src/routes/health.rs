//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 살아 있는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok" }`
//!
//! 리버스 프록시나 컨테이너 오케스트레이터의 상태 확인용이며,
//! 인증 없이 호출할 수 있는 유일한 API입니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 고정된 JSON만 돌려주는 가장 단순한 핸들러입니다.
/// Extractor도 `Result`도 없으므로 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//! Rust는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 표현합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 핸들러까지 전파되는 에러를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 에러 분류 정책:
//! - 입력 검증 실패(Validation)와 저장 실패(Storage)는 항상 요청자에게
//!   동기적으로 알립니다.
//! - 저장된 페이로드의 파싱 이상은 여기까지 오지 않습니다 — 스토어 어댑터가
//!   경고 로그만 남기고 빈 컬렉션으로 강등시킵니다. 목록 화면의 가용성이
//!   손상된 페이로드를 드러내는 것보다 우선이기 때문입니다.

use crate::store::kv::StoreError;
use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (400, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // 커스텀 에러 타입용 derive 매크로

// #[derive(Debug, Error)]:
// - Debug: 디버깅용 출력 ({:?})
// - Error (thiserror): std::error::Error 트레이트를 자동 구현하고,
//   #[error("...")] 어트리뷰트로 Display(사람이 읽을 메시지)도 만들어줍니다.
//
// 핸들러가 `Result<T, AppError>`를 반환하면 Axum이 IntoResponse를 통해
// 자동으로 HTTP 응답으로 변환합니다.

/// 핸들러 경계까지 전파되는 에러 종류.
#[derive(Debug, Error)]
pub enum AppError {
    /// 사용자 입력 문제 (HTTP 400).
    /// 어느 필드가 문제인지 이름을 실어 보내, 편집 화면이 해당 필드에
    /// 인라인으로 표시할 수 있게 합니다. 검증에 실패한 저장은 컬렉션을
    /// 건드리지 않습니다.
    #[error("validation failed on field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// 요청한 (제목, 버전) 조합이 이력에 없음 (HTTP 404)
    #[error("resource not found")]
    NotFound,

    /// 저장 매체가 쓰기/읽기를 거부함 (HTTP 500).
    /// #[from]: StoreError에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    /// 쿼터 초과 같은 쓰기 실패는 절대 삼키지 않고 요청자에게 알립니다.
    /// 메모리에 올라와 있던 컬렉션은 그대로이므로 부분 커밋은 없습니다.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// 서버 내부 오류 (HTTP 500)
    #[error("internal error: {0}")]
    Internal(String),
}

// impl IntoResponse for AppError:
// 핸들러가 Err(AppError)를 반환하면 Axum이 이 메서드를 호출해
// (상태 코드, JSON 본문) 응답을 만듭니다.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { field, ref reason } => (
                StatusCode::BAD_REQUEST,
                // 검증 에러만 body에 field가 추가로 실립니다.
                json!({
                    "error": {
                        "code": "validation_failed",
                        "field": field,
                        "message": reason
                    }
                }),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": {
                        "code": "not_found",
                        "message": "Resource not found"
                    }
                }),
            ),
            AppError::Storage(ref e) => {
                // 실제 매체 에러는 로그에만 기록하고 (서버 관리자용),
                // 클라이언트에는 저장 실패 사실만 알립니다.
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "storage_error",
                            "message": "Failed to persist recipe data"
                        }
                    }),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "internal_error",
                            "message": "An internal error occurred"
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

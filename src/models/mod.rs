//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 엔티티가 하나뿐인 서비스라 하위 모듈도 하나입니다:
//! - `recipe`: 레시피 버전 스냅샷과 요청 본문 구조체
//!
//! `pub use recipe::*;`는 하위 모듈의 공개 항목을 재공개(re-export)하여
//! `crate::models::recipe::RecipeVersion` 대신 `crate::models::RecipeVersion`으로
//! 짧게 접근할 수 있게 합니다.

pub mod recipe;

pub use recipe::*;

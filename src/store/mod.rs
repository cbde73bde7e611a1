//! # 저장소 접근 계층
//!
//! 영속화와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러는 이 모듈을 통해서만 저장 매체를 만납니다.
//!
//! 각 하위 모듈:
//! - `kv`: localStorage 모양의 key-value 인터페이스와 백엔드 구현들
//! - `recipes`: identity 단위 레시피 컬렉션의 load/save 어댑터

pub mod kv;
pub mod recipes;

pub use recipes::*;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 리포지토리 호출을 감싸고 다음 규칙들을 적용합니다.
//!
//! - "없음"(`Option::None`)을 도메인 에러 [`crate::errors::AppError::NotFound`]로 변환
//! - 통합 검색 상한 날짜를 하루 뒤로 보정 (달력일 전체 포함)
//! - 엔티티 ↔ DTO 매핑
//!
//! 각 서비스는 `Arc<Repository>`를 명시적으로 주입받아 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::user_service::UserService, posts::post_service::PostService};
//!
//! let user_service = UserService::new(user_repo);
//! let post_service = PostService::new(post_repo);
//! ```

pub mod users;
pub mod posts;

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 각 리포지토리는 `Arc<Database>`를
//! 명시적으로 주입받아 생성됩니다. 쿼리 필터는 `bson::doc!` 매크로로
//! 직접 구성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod users;
pub mod posts;

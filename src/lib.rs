//! 워크샵 블로그 서비스 백엔드
//!
//! Rust 기반의 간단한 블로그 CRUD/검색 서비스입니다.
//! MongoDB 문서 저장소 위에서 사용자(User)와 게시물(Post) 컬렉션에 대한
//! CRUD 및 텍스트/날짜 검색 REST API를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 수정, 삭제 (CRUD)
//! - **게시물 조회**: 전체/개별 조회
//! - **제목 검색**: 대소문자 무시 부분 문자열 검색
//! - **통합 검색**: 제목/본문/댓글 텍스트 + 날짜 범위 복합 검색
//! - **MongoDB**: 문서 기반 영구 저장
//! - **명시적 DI**: 시작 시점에 리포지토리 → 서비스 → 핸들러 순으로 수동 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 파라미터 디코딩
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← NotFound 변환, 날짜 보정, DTO 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 쿼리 필터 구성, 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blog_service_backend::db::Database;
//! use blog_service_backend::repositories::users::user_repo::UserRepository;
//! use blog_service_backend::services::users::user_service::UserService;
//!
//! let database = Arc::new(Database::new().await?);
//! let user_repo = Arc::new(UserRepository::new(database.clone()));
//! let user_service = UserService::new(user_repo);
//!
//! let users = user_service.find_all().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

//! 영속 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 도메인 엔티티들을 정의합니다.
//!
//! # Collections
//!
//! | 엔티티 | 컬렉션 | 비고 |
//! |--------|--------|------|
//! | [`user::User`] | `users` | CRUD 전체 지원 |
//! | [`post::Post`] | `posts` | 조회/검색 전용, 댓글 내장 |

pub mod user;
pub mod post;

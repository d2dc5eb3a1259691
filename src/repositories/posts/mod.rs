//! 게시물 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`PostRepository`](post_repo::PostRepository)를 통해 게시물 조회와
//! 제목/통합 검색 쿼리를 제공합니다.

pub mod post_repo;

//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기(생성, 조회, 수정, 삭제)와 관련된 비즈니스 로직을
//! 담당합니다.

pub mod user_service;

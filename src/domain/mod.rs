//! 도메인 계층 모듈
//!
//! 영속 엔티티와 HTTP 경계용 DTO를 제공합니다.
//!
//! # 구조
//!
//! - [`entities`] - MongoDB에 저장되는 형태 (`User`, `Post`, `Comment`)
//! - [`dto`] - 와이어 표현을 저장 표현에서 분리하는 경계 형태 (`UserDto`)

pub mod entities;
pub mod dto;

//! Post Entity Implementation
//!
//! 게시물 엔티티와 내장 댓글 구현체입니다.
//! 댓글은 독립적인 식별자나 생명주기 없이 게시물 문서 안에 내장되며,
//! 게시물이 삭제되면 함께 삭제됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 작성자 참조
///
/// 게시물/댓글에 비정규화되어 내장되는 이름/ID 쌍입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// 작성자 사용자 ID (16진수 문자열)
    pub id: String,
    /// 작성자 표시 이름
    pub name: String,
}

/// 내장 댓글
///
/// 부모 게시물에 독점적으로 소유되며 별도 컬렉션을 갖지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 댓글 본문
    pub text: String,
    /// 작성 시각
    pub date: DateTime,
    /// 댓글 작성자
    pub author: AuthorRef,
}

/// 게시물 엔티티
///
/// `posts` 컬렉션에 저장되는 형태입니다.
/// 이 시스템에서 게시물은 조회/검색 전용이며 HTTP로 생성/수정되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시 일시
    pub date: DateTime,
    /// 제목
    pub title: String,
    /// 본문
    pub body: String,
    /// 게시물 작성자 (비정규화)
    pub author: AuthorRef,
    /// 내장 댓글 목록 (게시물과 생명주기를 같이함)
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// 아직 저장되지 않은 새 게시물을 생성합니다.
    pub fn new(date: DateTime, title: String, body: String, author: AuthorRef) -> Self {
        Self {
            id: None,
            date,
            title,
            body,
            author,
            comments: Vec::new(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

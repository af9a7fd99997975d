//! 错误类型定义

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(i64),

    #[error("顶点不存在: {0}")]
    VertexNotExists(VertexId),

    #[error("边已存在: {0}")]
    EdgeAlreadyExists(EdgeId),

    #[error("边不存在: {0}")]
    EdgeNotExists(EdgeId),
}

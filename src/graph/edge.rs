//! 边定义
//!
//! 带权有向边，只持有两端顶点的句柄，不拥有顶点

use crate::graph::vertex::VertexId;
use std::fmt;

/// 边 ID（记录表中的稳定句柄）
///
/// 与 [`VertexId`] 一样只在创建它的记录表中有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    arena: u32,
    slot: u64,
}

impl EdgeId {
    pub(crate) fn new(arena: u32, slot: u64) -> Self {
        Self { arena, slot }
    }

    pub(crate) fn arena(&self) -> u32 {
        self.arena
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.slot)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// 权重（构造后只读）
    weight: f64,
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
}

impl Edge {
    /// 创建新边，不影响两端顶点
    pub fn new(src: VertexId, dst: VertexId, weight: f64) -> Self {
        Self { weight, src, dst }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// 原地反转方向，权重不变
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.src, &mut self.dst);
    }

    /// 是否以给定顶点为端点
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.src == vertex || self.dst == vertex
    }

    /// 从给定端点看过去的另一端
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.src == vertex {
            self.dst
        } else {
            self.src
        }
    }
}

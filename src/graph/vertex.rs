//! 顶点定义
//!
//! 顶点以整数值为标识键，并持有其关联边列表（按插入顺序）

use super::arena::Arena;
use super::edge::EdgeId;
use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// 顶点 ID（记录表中的稳定句柄）
///
/// 句柄带有创建它的记录表标记，只在该记录表（及其所在的图）中有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    arena: u32,
    slot: u64,
}

impl VertexId {
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

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.slot)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点值（图内唯一）
    value: i64,
    /// 关联边
    edges: SmallVec<[EdgeId; 4]>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, value: i64) -> Self {
        Self {
            id,
            value,
            edges: SmallVec::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点值
    pub fn value(&self) -> i64 {
        self.value
    }

    /// 批量添加关联边
    ///
    /// 遇到第一条重复边时返回 `EdgeAlreadyExists`，之前已添加的边保留
    pub fn add_edges(&mut self, edges: &[EdgeId]) -> Result<()> {
        for &edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId) -> Result<()> {
        if self.has_edge(edge) {
            return Err(Error::EdgeAlreadyExists(edge));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// 删除关联边
    pub fn delete_edge(&mut self, edge: EdgeId) -> Result<()> {
        match self.edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                Ok(())
            }
            None => Err(Error::EdgeNotExists(edge)),
        }
    }

    /// 删除所有关联边
    pub fn delete_all_edges(&mut self) {
        self.edges.clear();
    }

    /// 获取所有关联边
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// 获取度数（关联边数量）
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// 获取邻居：每条关联边的另一端点（自环返回自身）
    pub fn neighbors(&self, arena: &Arena) -> Vec<VertexId> {
        self.edges
            .iter()
            .filter_map(|&id| arena.edge(id))
            .map(|edge| edge.opposite(self.id))
            .collect()
    }

    /// 是否与给定顶点相邻（不区分方向）
    pub fn has_neighbor(&self, other: VertexId, arena: &Arena) -> bool {
        self.find_edge(other, arena).is_some()
    }

    /// 查找第一条连接给定顶点的关联边（不区分方向）
    ///
    /// 按本顶点看过去的另一端匹配，查找自身时只命中自环
    pub fn find_edge(&self, other: VertexId, arena: &Arena) -> Option<EdgeId> {
        self.edges.iter().copied().find(|&id| {
            arena
                .edge(id)
                .map(|edge| edge.opposite(self.id) == other)
                .unwrap_or(false)
        })
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

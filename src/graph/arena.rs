//! 顶点与边的记录表
//!
//! 所有交叉引用都是句柄，经由本表解析，不存在所有权环

use super::edge::{Edge, EdgeId};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicU32, Ordering};

/// 下一个记录表标记
static NEXT_ARENA_TAG: AtomicU32 = AtomicU32::new(1);

/// 顶点/边记录表，句柄即下标，记录创建后永不移动
///
/// 每个记录表有唯一标记，其他记录表创建的句柄在此解析为不存在。
/// 克隆出的记录表沿用原标记，原句柄在副本中继续有效
#[derive(Debug, Clone)]
pub struct Arena {
    tag: u32,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            tag: NEXT_ARENA_TAG.fetch_add(1, Ordering::SeqCst),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// 创建独立顶点（不属于任何图）
    pub fn create_vertex(&mut self, value: i64) -> VertexId {
        let id = VertexId::new(self.tag, self.vertices.len() as u64);
        self.vertices.push(Vertex::new(id, value));
        id
    }

    /// 创建独立边，两端顶点的关联边列表不受影响
    pub fn create_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> Result<EdgeId> {
        for vertex in [src, dst] {
            if self.vertex(vertex).is_none() {
                return Err(Error::VertexNotExists(vertex));
            }
        }

        let id = EdgeId::new(self.tag, self.edges.len() as u64);
        self.edges.push(Edge::new(src, dst, weight));
        Ok(id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        if id.arena() != self.tag {
            return None;
        }
        self.vertices.get(id.slot())
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        if id.arena() != self.tag {
            return None;
        }
        self.vertices.get_mut(id.slot())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        if id.arena() != self.tag {
            return None;
        }
        self.edges.get(id.slot())
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        if id.arena() != self.tag {
            return None;
        }
        self.edges.get_mut(id.slot())
    }

    /// 顶点记录数
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 边记录数
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 获取顶点的邻居
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        let vertex = self.vertex(id).ok_or(Error::VertexNotExists(id))?;
        Ok(vertex.neighbors(self))
    }

    pub fn has_neighbor(&self, id: VertexId, other: VertexId) -> bool {
        self.find_edge(id, other).is_some()
    }

    /// 查找连接两顶点的第一条边（按 `id` 的关联边列表顺序）
    pub fn find_edge(&self, id: VertexId, other: VertexId) -> Option<EdgeId> {
        self.vertex(id)?.find_edge(other, self)
    }

    /// 边的文本表示："<源> to <目标>"
    pub fn describe_edge(&self, id: EdgeId) -> Option<String> {
        let edge = self.edge(id)?;
        let src = self.vertex(edge.src())?;
        let dst = self.vertex(edge.dst())?;
        Some(format!("{} to {}", src, dst))
    }

    pub(crate) fn attach(&mut self, vertex: VertexId, edge: EdgeId) -> Result<()> {
        self.vertex_mut(vertex)
            .ok_or(Error::VertexNotExists(vertex))?
            .add_edge(edge)
    }

    pub(crate) fn detach(&mut self, vertex: VertexId, edge: EdgeId) -> Result<()> {
        self.vertex_mut(vertex)
            .ok_or(Error::VertexNotExists(vertex))?
            .delete_edge(edge)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_handles_are_distinct() {
        let mut arena = Arena::new();
        let a = arena.create_vertex(1);
        let b = arena.create_vertex(1);

        assert_ne!(a, b);
        assert_eq!(arena.vertex(a).unwrap().value(), 1);
        assert_eq!(arena.vertex(b).unwrap().value(), 1);
        assert_eq!(arena.vertex_count(), 2);
    }

    #[test]
    fn test_arena_create_edge_does_not_touch_vertices() {
        let mut arena = Arena::new();
        let v0 = arena.create_vertex(0);
        let v1 = arena.create_vertex(1);
        let e = arena.create_edge(v0, v1, 5.0).unwrap();

        assert_eq!(arena.edge(e).unwrap().weight(), 5.0);
        assert_eq!(arena.vertex(v0).unwrap().degree(), 0);
        assert_eq!(arena.vertex(v1).unwrap().degree(), 0);
        assert_eq!(arena.edge_count(), 1);
    }

    #[test]
    fn test_arena_create_edge_unknown_vertex() {
        let mut arena = Arena::new();
        let v0 = arena.create_vertex(0);
        let ghost = VertexId::new(arena.tag, 42);

        assert_eq!(
            arena.create_edge(v0, ghost, 1.0),
            Err(Error::VertexNotExists(ghost))
        );
        assert_eq!(arena.edge_count(), 0);
    }

    #[test]
    fn test_arena_describe_edge() {
        let mut arena = Arena::new();
        let v0 = arena.create_vertex(0);
        let v1 = arena.create_vertex(1);
        let e = arena.create_edge(v0, v1, 5.0).unwrap();

        assert_eq!(arena.describe_edge(e).as_deref(), Some("0 to 1"));

        arena.edge_mut(e).unwrap().reverse();
        assert_eq!(arena.describe_edge(e).as_deref(), Some("1 to 0"));

        assert_eq!(arena.describe_edge(EdgeId::new(arena.tag, 9)), None);
    }

    #[test]
    fn test_arena_neighbors_unknown_vertex() {
        let arena = Arena::new();
        let ghost = VertexId::new(arena.tag, 0);

        assert_eq!(arena.neighbors(ghost), Err(Error::VertexNotExists(ghost)));
        assert_eq!(arena.find_edge(ghost, ghost), None);
        assert!(!arena.has_neighbor(ghost, ghost));
    }

    #[test]
    fn test_arena_rejects_foreign_handles() {
        let mut a = Arena::new();
        let mut b = Arena::new();
        let a0 = a.create_vertex(5);
        let a1 = a.create_vertex(6);
        let ea = a.create_edge(a0, a1, 1.0).unwrap();
        let b0 = b.create_vertex(9);

        assert!(b.vertex(a0).is_none());
        assert!(b.vertex_mut(a0).is_none());
        assert!(b.edge(ea).is_none());
        assert_eq!(b.create_edge(b0, a0, 1.0), Err(Error::VertexNotExists(a0)));
        assert_eq!(a.vertex(a0).unwrap().value(), 5);
    }

    #[test]
    fn test_arena_clone_keeps_handles() {
        let mut arena = Arena::new();
        let v0 = arena.create_vertex(3);
        let copy = arena.clone();

        assert_eq!(copy.vertex(v0).unwrap().value(), 3);
    }
}

//! 图数据结构
//!
//! 持有顶点/边记录表、顶点集合和权威边列表，负责维护两者之间的一致性

use super::arena::Arena;
use super::edge::{Edge, EdgeId};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// 邻接矩阵中"不相连"的哨兵值（最大有限 f64，并非真正的无穷）
pub const NO_CONNECTION: f64 = f64::MAX;

/// 带权图
///
/// ```
/// use weightgraph::Graph;
///
/// let mut graph = Graph::directed();
/// let v0 = graph.create_vertex(0);
/// let v1 = graph.create_vertex(1);
/// let e = graph.create_edge(v0, v1, 5.0).unwrap();
///
/// graph.add_edges(&[e]).unwrap();
/// assert_eq!(graph.to_string(), "0 1");
/// assert_eq!(graph.describe_edge(e).as_deref(), Some("0 to 1"));
///
/// graph.reverse();
/// assert_eq!(graph.describe_edge(e).as_deref(), Some("1 to 0"));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// 是否有向（构造后不变）
    directed: bool,
    /// 顶点与边记录
    arena: Arena,
    /// 顶点值 -> 顶点 ID（插入顺序即顶点下标）
    vertices: IndexMap<i64, VertexId>,
    /// 已注册的边（插入顺序）
    edges: IndexSet<EdgeId>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            arena: Arena::new(),
            vertices: IndexMap::new(),
            edges: IndexSet::new(),
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 记录创建 ====================

    /// 创建独立顶点，尚未加入图
    pub fn create_vertex(&mut self, value: i64) -> VertexId {
        self.arena.create_vertex(value)
    }

    /// 创建独立边，尚未注册到图，两端顶点不受影响
    pub fn create_edge(&mut self, src: VertexId, dst: VertexId, weight: f64) -> Result<EdgeId> {
        self.arena.create_edge(src, dst, weight)
    }

    // ==================== 顶点操作 ====================

    /// 批量添加顶点
    ///
    /// 遇到第一个重复值时返回 `VertexAlreadyExists`，之前已添加的顶点保留
    pub fn add_vertices(&mut self, vertices: &[VertexId]) -> Result<()> {
        for &vertex in vertices {
            self.add_vertex(vertex)?;
        }
        Ok(())
    }

    fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        let value = self
            .arena
            .vertex(id)
            .ok_or(Error::VertexNotExists(id))?
            .value();

        if self.vertices.contains_key(&value) {
            return Err(Error::VertexAlreadyExists(value));
        }
        self.vertices.insert(value, id);

        debug!(vertex = %id, value, "顶点已加入图");
        Ok(())
    }

    /// 顶点是否属于本图（按句柄判断）
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_position(id).is_some()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.arena.vertex(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取所有顶点（插入顺序的副本）
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.values().copied().collect()
    }

    // ==================== 边操作 ====================

    /// 批量注册边，同时挂到端点顶点上
    ///
    /// 未加入图的端点会被自动加入。遇到第一个错误即停止，之前已注册的边保留
    pub fn add_edges(&mut self, edges: &[EdgeId]) -> Result<()> {
        for &edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    fn add_edge(&mut self, id: EdgeId) -> Result<()> {
        if self.edges.contains(&id) {
            return Err(Error::EdgeAlreadyExists(id));
        }
        let (src, dst) = self.endpoints(id)?;

        for vertex in [src, dst] {
            if !self.contains_vertex(vertex) {
                self.add_vertex(vertex)?;
            }
        }

        self.edges.insert(id);
        self.arena.attach(src, id)?;
        // 无向图两端都挂边，自环只挂一次
        if !self.directed && src != dst {
            self.arena.attach(dst, id)?;
        }

        debug!(edge = %id, src = %src, dst = %dst, "边已注册");
        Ok(())
    }

    /// 删除边，同时从端点顶点上摘除
    ///
    /// 先摘顶点侧，再删边列表；顶点侧失败时边列表保持不变
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        if !self.edges.contains(&id) {
            return Err(Error::EdgeNotExists(id));
        }
        let (src, dst) = self.endpoints(id)?;

        self.arena.detach(src, id)?;
        if !self.directed && src != dst {
            self.arena.detach(dst, id)?;
        }
        self.edges.shift_remove(&id);

        debug!(edge = %id, "边已删除");
        Ok(())
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.arena.edge(id)
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 获取所有边（插入顺序的副本）
    pub fn edges(&self) -> Vec<EdgeId> {
        self.edges.iter().copied().collect()
    }

    /// 边的文本表示："<源> to <目标>"
    pub fn describe_edge(&self, id: EdgeId) -> Option<String> {
        self.arena.describe_edge(id)
    }

    /// 查找连接两顶点的边
    ///
    /// `start` 不属于本图时返回 `None`，不检查 `end`
    pub fn find_edge(&self, start: VertexId, end: VertexId) -> Option<EdgeId> {
        if !self.contains_vertex(start) {
            return None;
        }
        self.arena.find_edge(start, end)
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        if !self.contains_vertex(id) {
            return Err(Error::VertexNotExists(id));
        }
        self.arena.neighbors(id)
    }

    /// 获取顶点的度数
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        if !self.contains_vertex(id) {
            return Err(Error::VertexNotExists(id));
        }
        self.arena
            .vertex(id)
            .map(Vertex::degree)
            .ok_or(Error::VertexNotExists(id))
    }

    // ==================== 整图变换 ====================

    /// 所有边权之和（按边列表顺序从左到右累加）
    pub fn weight(&self) -> f64 {
        self.edges
            .iter()
            .filter_map(|&id| self.arena.edge(id))
            .fold(0.0, |acc, edge| acc + edge.weight())
    }

    /// 反转所有边的方向
    ///
    /// 有向图中每条边依次：从旧源点摘除、挂到旧目标点、翻转自身。
    /// 无向图两端本就都挂着边，只翻转边本身
    pub fn reverse(&mut self) {
        for &id in &self.edges {
            let (src, dst) = match self.arena.edge(id) {
                Some(edge) => (edge.src(), edge.dst()),
                None => continue,
            };

            if self.directed {
                if let Err(err) = self.arena.detach(src, id) {
                    warn!(edge = %id, %err, "反转时源点缺少该边");
                }
                if let Err(err) = self.arena.attach(dst, id) {
                    warn!(edge = %id, %err, "反转时目标点已有该边");
                }
            }
            if let Some(edge) = self.arena.edge_mut(id) {
                edge.reverse();
            }

            trace!(edge = %id, src = %dst, dst = %src, "边已反转");
        }

        debug!(edges = self.edges.len(), "图已反转");
    }

    // ==================== 派生视图 ====================

    /// 邻接矩阵
    ///
    /// 按顶点下标索引，(i, j) 为 i 到 j 的边权，不相连为 [`NO_CONNECTION`]
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![NO_CONNECTION; n]; n];

        for (i, &id) in self.vertices.values().enumerate() {
            let vertex = match self.arena.vertex(id) {
                Some(vertex) => vertex,
                None => continue,
            };
            for neighbor in vertex.neighbors(&self.arena) {
                let j = match self.vertex_position(neighbor) {
                    Some(j) => j,
                    None => continue,
                };
                if let Some(edge) = self.find_edge(id, neighbor).and_then(|e| self.arena.edge(e)) {
                    matrix[i][j] = edge.weight();
                }
            }
        }

        matrix
    }

    /// 顶点 ID -> 顶点下标（插入顺序）
    pub fn vertices_indices(&self) -> HashMap<VertexId, usize> {
        self.vertices
            .values()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect()
    }

    /// 获取单个顶点的下标
    pub fn vertex_index(&self, id: VertexId) -> Result<usize> {
        self.vertex_position(id).ok_or(Error::VertexNotExists(id))
    }

    /// 获取记录表引用
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    fn vertex_position(&self, id: VertexId) -> Option<usize> {
        let value = self.arena.vertex(id)?.value();
        let (index, _, &stored) = self.vertices.get_full(&value)?;
        (stored == id).then_some(index)
    }

    fn endpoints(&self, id: EdgeId) -> Result<(VertexId, VertexId)> {
        self.arena
            .edge(id)
            .map(|edge| (edge.src(), edge.dst()))
            .ok_or(Error::EdgeNotExists(id))
    }
}

/// 顶点值按升序以单个空格连接
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values: Vec<i64> = self.vertices.keys().copied().collect();
        values.sort_unstable();

        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

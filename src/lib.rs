//! WeightGraph - 内存带权图
//!
//! 支持有向/无向两种拓扑的小型图数据结构：
//! - 顶点、边的创建与注册，边的删除
//! - 邻居、边、度数查询与邻接矩阵
//! - 整图反转与总权重
//!
//! 顶点与边都以句柄（[`VertexId`] / [`EdgeId`]）引用，记录由图内部的
//! [`Arena`] 持有。

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Arena, Edge, EdgeId, Graph, Vertex, VertexId, NO_CONNECTION};

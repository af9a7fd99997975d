//! 图核心模块
//!
//! 定义顶点、边、记录表和图的核心数据结构

mod arena;
mod edge;
mod graph;
mod vertex;

pub use arena::Arena;
pub use edge::{Edge, EdgeId};
pub use graph::{Graph, NO_CONNECTION};
pub use vertex::{Vertex, VertexId};

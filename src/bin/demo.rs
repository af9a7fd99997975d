//! WeightGraph 演示入口
//!
//! 构建一个三顶点、一条边的小图；任一步骤失败即以致命日志退出

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weightgraph::{Graph, Result};

#[derive(Parser, Debug)]
#[command(name = "weightgraph-demo")]
#[command(about = "WeightGraph 演示程序")]
struct Args {
    /// 构建无向图（默认有向）
    #[arg(short, long)]
    undirected: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn build(directed: bool) -> Result<Graph> {
    let mut graph = Graph::new(directed);

    let vertices: Vec<_> = (0..3).map(|value| graph.create_vertex(value)).collect();
    graph.add_vertices(&vertices)?;

    let edge = graph.create_edge(vertices[0], vertices[1], 0.0)?;
    graph.add_edges(&[edge])?;

    Ok(graph)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let graph = match build(!args.undirected) {
        Ok(graph) => graph,
        Err(err) => {
            error!(%err, "构建图失败");
            std::process::exit(1);
        }
    };

    info!(
        directed = graph.is_directed(),
        vertices = %graph,
        edges = graph.edge_count(),
        weight = graph.weight(),
        "图已构建"
    );
    for edge in graph.edges() {
        if let Some(desc) = graph.describe_edge(edge) {
            info!(edge = %edge, "{}", desc);
        }
    }
    info!(matrix = ?graph.adjacency_matrix(), "邻接矩阵");

    Ok(())
}

pub mod attack;
pub mod graph;
pub mod stats;

pub use attack::Attack;
pub use graph::{build_graph, AttackGraph, Edge, Node};
pub use stats::{compute_stats, most_attacked, UserStats};

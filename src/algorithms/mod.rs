pub mod a_star;
pub mod common;
pub mod frontier;
pub mod node;
pub mod reference;

pub use a_star::{manhattan_distance, AStar};
pub use common::{PathfindingAlgorithm, Route, SearchOutcome};
pub use reference::{shortest_path_length, ReferenceAStar};

use crate::config::AlgorithmKind;

pub fn create_algorithm(kind: AlgorithmKind) -> Box<dyn PathfindingAlgorithm> {
    match kind {
        AlgorithmKind::AStar => Box::new(AStar::new()),
        AlgorithmKind::Reference => Box::new(ReferenceAStar::new()),
    }
}

//! Shortest robot routes on a 2-D grid with obstacles.
//!
//! The core is a hand-written A* search ([`algorithms::AStar`]) over a
//! [`grid::Grid`], driven by a binary min-heap frontier. A finished search
//! leaves its route on the grid as `Path` cells, which [`path`] turns back
//! into coordinates and step-by-step directions.

pub mod algorithms;
pub mod batch_simulation;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod simulation;
pub mod statistics;

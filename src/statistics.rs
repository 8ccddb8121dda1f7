use std::fmt;
use std::time::Duration;

/// Counters collected while a single search runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Nodes popped from the frontier.
    pub nodes_expanded: usize,
    /// Nodes pushed onto the frontier, the start node included.
    pub nodes_generated: usize,
    pub peak_frontier_len: usize,
    pub elapsed: Duration,
}

impl SearchStatistics {
    pub fn record_generated(&mut self, frontier_len: usize) {
        self.nodes_generated += 1;
        self.peak_frontier_len = self.peak_frontier_len.max(frontier_len);
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Nodes generated: {}", self.nodes_generated)?;
        writeln!(f, "Peak frontier size: {}", self.peak_frontier_len)?;
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Compares a route against the breadth-first optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuality {
    pub route_length: usize,
    pub optimal_length: usize,
}

impl RouteQuality {
    pub fn is_optimal(&self) -> bool {
        self.route_length == self.optimal_length
    }

    /// Route length over the optimal length; 1.0 means optimal.
    pub fn efficiency(&self) -> f64 {
        if self.optimal_length == 0 {
            1.0
        } else {
            self.route_length as f64 / self.optimal_length as f64
        }
    }
}

impl fmt::Display for RouteQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route length: {}", self.route_length)?;
        writeln!(f, "Optimal length: {}", self.optimal_length)?;
        writeln!(f, "Route efficiency: {:.3}", self.efficiency())?;
        if !self.is_optimal() {
            writeln!(
                f,
                "⚠ Route is {} steps longer than optimal",
                self.route_length.saturating_sub(self.optimal_length)
            )?;
        }
        Ok(())
    }
}

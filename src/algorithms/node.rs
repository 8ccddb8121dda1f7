use crate::grid::Position;

/// Index of a closed node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One candidate step of the search.
///
/// Nodes are never edited once built: a cheaper way to reach a position that
/// is already queued becomes a second node. `parent` points backwards into
/// the arena of the search that created the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Position,
    pub parent: Option<NodeId>,
    /// Steps taken from the start (g-score).
    pub cost: u32,
    /// Estimated steps left to the goal (h-score).
    pub heuristic: u32,
}

impl SearchNode {
    pub fn new(position: Position, parent: Option<NodeId>, cost: u32, heuristic: u32) -> Self {
        SearchNode {
            position,
            parent,
            cost,
            heuristic,
        }
    }

    pub fn f_score(&self) -> u32 {
        self.cost + self.heuristic
    }

    /// Frontier ordering: strictly smaller f-score.
    pub fn is_smaller_than(&self, other: &SearchNode) -> bool {
        self.f_score() < other.f_score()
    }
}

/// Owns the nodes a search has expanded so their parent links stay valid
/// until the route has been rebuilt.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root of the tree down to `node`, in travel order.
    pub fn route_to(&self, node: &SearchNode) -> Vec<Position> {
        let mut route = vec![node.position];
        let mut parent = node.parent;
        while let Some(ancestor) = parent.and_then(|id| self.get(id)) {
            route.push(ancestor.position);
            parent = ancestor.parent;
        }
        route.reverse();
        route
    }
}

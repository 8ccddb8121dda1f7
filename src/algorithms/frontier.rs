use crate::algorithms::node::SearchNode;
use crate::error::SearchError;

/// Binary min-heap of search nodes keyed on f-score.
///
/// Equal f-scores keep their structural order: sifting only swaps on a
/// strictly smaller key, and sift-down prefers the left child on a tie.
/// The backing vector starts at the requested capacity and grows as needed,
/// since a position can be queued once from each of its neighbors before it
/// is closed.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<SearchNode>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn peek(&self) -> Option<&SearchNode> {
        self.heap.first()
    }

    pub fn insert(&mut self, node: SearchNode) {
        self.heap.push(node);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the node with the smallest f-score.
    pub fn extract_min(&mut self) -> Result<SearchNode, SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }
        let min = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].is_smaller_than(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].is_smaller_than(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].is_smaller_than(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.heap[i].f_score() >= self.heap[parent].f_score()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn node(x: usize, cost: u32, heuristic: u32) -> SearchNode {
        SearchNode::new(Position::new(x, 0), None, cost, heuristic)
    }

    #[test]
    fn extract_from_empty_frontier_fails() {
        let mut frontier = Frontier::with_capacity(4);
        assert!(frontier.is_empty());
        assert_eq!(frontier.extract_min(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn extracts_in_f_score_order() {
        let mut frontier = Frontier::with_capacity(2);
        for (x, f) in [5, 1, 4, 1, 3, 9, 2, 6].into_iter().enumerate() {
            frontier.insert(node(x, f, 0));
        }
        // Grows past the initial capacity.
        assert_eq!(frontier.len(), 8);
        assert_eq!(frontier.peek().map(SearchNode::f_score), Some(1));

        let mut scores = Vec::new();
        while let Ok(n) = frontier.extract_min() {
            scores.push(n.f_score());
        }
        assert_eq!(scores, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn ties_never_swap_nodes() {
        let mut frontier = Frontier::default();
        frontier.insert(node(0, 1, 1));
        frontier.insert(node(1, 2, 0));
        frontier.insert(node(2, 0, 2));

        assert_eq!(frontier.extract_min().unwrap().position.x, 0);
        // The last node is moved to the root and stays there on a tie.
        assert_eq!(frontier.extract_min().unwrap().position.x, 2);
        assert_eq!(frontier.extract_min().unwrap().position.x, 1);
    }

    #[test]
    fn heap_order_survives_random_operations() {
        let mut rng = StdRng::seed_from_u64(0xA57A);
        let mut frontier = Frontier::with_capacity(16);

        for round in 0..2000 {
            if rng.gen_bool(0.6) || frontier.is_empty() {
                frontier.insert(node(round, rng.gen_range(0..40), rng.gen_range(0..10)));
            } else {
                let min = frontier.extract_min().unwrap();
                assert!(frontier.peek().map_or(true, |next| next.f_score() >= min.f_score()));
            }
            assert!(frontier.is_heap_ordered(), "heap order broken at round {}", round);
        }
    }
}

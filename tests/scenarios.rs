use robot_grid::algorithms::{AStar, PathfindingAlgorithm, ReferenceAStar};
use robot_grid::grid::{Cell, Direction, Grid, Position};
use robot_grid::path::{collect_path_coordinates, path_found, PathDirections};

fn grid(layout: &str) -> Grid {
    layout.parse().unwrap()
}

#[test]
fn corner_to_corner_on_open_3x3() {
    let mut g = grid(
        "R . .
         . . .
         . . G",
    );
    let outcome = AStar::new().search(&mut g).unwrap();
    let route = outcome.route.unwrap();

    assert_eq!(route.cost, 4);
    assert!(path_found(&g));

    let coordinates = collect_path_coordinates(&g);
    assert_eq!(coordinates.len(), 3);
    // Row-major order, whatever order the robot walks them in.
    let mut sorted = coordinates.clone();
    sorted.sort_by_key(|p| (p.y, p.x));
    assert_eq!(coordinates, sorted);
    // Every marked cell lies on the returned route.
    for pos in &coordinates {
        assert!(route.positions.contains(pos));
    }
}

#[test]
fn single_row_moves_right() {
    let mut g = grid("R . . . G");
    let route = AStar::new().search(&mut g).unwrap().route.unwrap();
    assert_eq!(route.steps(), 4);

    let coordinates = collect_path_coordinates(&g);
    assert_eq!(
        coordinates,
        vec![Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
    );

    let directions = PathDirections::from_coordinates(&coordinates);
    assert!(directions
        .moves()
        .iter()
        .all(|step| step.direction == Direction::Right));
    assert_eq!(directions.final_position(), Some(Position::new(3, 0)));
}

#[test]
fn blocked_middle_row_has_no_path() {
    let mut g = grid(
        "R . .
         / / /
         . . G",
    );
    let before = g.to_string();
    let outcome = AStar::new().search(&mut g).unwrap();

    assert!(!outcome.is_found());
    assert!(!path_found(&g));
    assert_eq!(g.to_string(), before);
    assert_eq!(
        PathDirections::from_grid(&g).to_string(),
        "No path directions available.\n"
    );
}

#[test]
fn enclosed_goal_is_unreachable() {
    let mut g = grid(
        "R . . . .
         . . / . .
         . / G / .
         . . / . .
         . . . . .",
    );
    let before = g.clone();
    let outcome = AStar::new().search(&mut g).unwrap();

    assert!(!outcome.is_found());
    assert_eq!(g, before);
    // Every open cell other than the goal is expanded at least once.
    assert!(outcome.statistics.nodes_expanded >= 20);
}

#[test]
fn failed_search_is_repeatable() {
    let mut g = grid(
        ". R / .
         . . / G
         . . / .",
    );
    let initial = g.to_string();

    let first = AStar::new().search(&mut g).unwrap();
    let after_first = g.to_string();
    let second = AStar::new().search(&mut g).unwrap();
    let after_second = g.to_string();

    assert!(!first.is_found() && !second.is_found());
    assert_eq!(initial.as_bytes(), after_first.as_bytes());
    assert_eq!(after_first.as_bytes(), after_second.as_bytes());
    assert_eq!(first.statistics.nodes_expanded, second.statistics.nodes_expanded);
}

#[test]
fn start_and_goal_survive_path_marking() {
    let mut g = grid(
        ". . . .
         R / . G
         . . . .",
    );
    AStar::new().search(&mut g).unwrap();

    assert_eq!(g.state_at(Position::new(0, 1)), Ok(Cell::Start));
    assert_eq!(g.state_at(Position::new(3, 1)), Ok(Cell::Goal));
    assert_eq!(g.count(Cell::Path), 4);
}

#[test]
fn both_planners_agree_on_cost() {
    let layout = "R . . / . . . .
                  . / . / . / / .
                  . / . . . / . .
                  . / / / . / . /
                  . . . / . . . G";
    let mut ours = grid(layout);
    let mut reference = grid(layout);

    let ours_route = AStar::new().find_path(&mut ours).unwrap().route.unwrap();
    let reference_route = ReferenceAStar::new()
        .find_path(&mut reference)
        .unwrap()
        .route
        .unwrap();

    assert_eq!(ours_route.cost, reference_route.cost);
    assert_eq!(ours.count(Cell::Path), reference.count(Cell::Path));
}

#[test]
fn largest_grid_is_searchable() {
    let mut g = Grid::new(50, 50).unwrap();
    g.set_start(Position::new(0, 0)).unwrap();
    g.set_goal(Position::new(49, 49)).unwrap();
    // A wall down the middle with one gap at the bottom.
    for y in 0..49 {
        g.set_state(Position::new(25, y), Cell::Obstacle).unwrap();
    }

    let route = AStar::new().search(&mut g).unwrap().route.unwrap();
    assert_eq!(route.steps(), 98);
    assert_eq!(g.count(Cell::Path), 97);
}

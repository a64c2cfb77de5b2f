use maze_core::{Grid, Pos, Terrain};
use maze_gen::MazeGen;
use maze_paths::{Algorithm, Solver, is_perfect};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generated(rows: i32, cols: i32, seed: u64, loops: Option<f64>, terrain: bool) -> Grid {
    let mut mg = MazeGen::new(rows, cols, StdRng::seed_from_u64(seed)).unwrap();
    mg.generate_prim();
    if let Some(p) = loops {
        mg.add_loops(p);
    }
    if terrain {
        mg.generate_terrain();
    }
    mg.into_grid()
}

fn weights(g: &Grid) -> Vec<i32> {
    g.iter().map(|(_, c)| c.weight()).collect()
}

#[test]
fn two_cells_connect_only_after_carving() {
    let mut g = Grid::new(1, 2).unwrap();
    let mut s = Solver::new(&g);
    assert!(!s.solve(&g, Algorithm::Bfs));
    assert!(s.path().is_empty());
    assert_eq!(s.cells_explored(), 1);

    g.carve_passage(Pos::new(0, 0), Pos::new(0, 1)).unwrap();
    assert!(s.solve(&g, Algorithm::Bfs));
    assert_eq!(s.path_length(), 2);
    assert_eq!(s.path_cost(), 2);
    assert_eq!(s.path(), &[Pos::new(0, 0), Pos::new(0, 1)]);
}

#[test]
fn open_three_by_three() {
    let mut g = Grid::new(3, 3).unwrap();
    g.open_all();
    let mut s = Solver::new(&g);

    assert!(s.solve(&g, Algorithm::Dijkstra));
    assert_eq!(s.path_length(), 5);
    assert_eq!(s.path_cost(), 5);
    let dijkstra = *s.stats();

    assert!(s.solve(&g, Algorithm::Bfs));
    assert_eq!(s.path_length(), dijkstra.path_length);
    assert_eq!(s.path_cost(), dijkstra.path_cost);
}

#[test]
fn heavy_cell_on_only_corridor() {
    let mut g = Grid::new(1, 5).unwrap();
    g.open_all();
    g.set_weight(Pos::new(0, 2), 10).unwrap();
    let mut s = Solver::new(&g);

    assert!(s.solve(&g, Algorithm::Bfs));
    let hops = s.path_length() as i64;
    assert_eq!(hops, 5);

    assert!(s.solve(&g, Algorithm::Dijkstra));
    assert_eq!(s.path_cost(), 1 + 1 + 10 + 1 + 1);
    assert!(s.path_cost() > hops);
}

#[test]
fn weighted_searches_avoid_water() {
    // 2x3 ring: top row goes through water, bottom row is clear.
    let mut g = Grid::new(2, 3).unwrap();
    g.open_all();
    g.set_terrain(Pos::new(0, 1), Terrain::Water).unwrap();
    g.set_terrain(Pos::new(0, 2), Terrain::Water).unwrap();
    let mut s = Solver::new(&g);
    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        assert!(s.solve(&g, a));
        assert!(!s.on_final_path(Pos::new(0, 1)), "{a}");
        assert_eq!(s.path_cost(), 4);
    }
}

#[test]
fn bfs_walks_through_water_on_the_shortest_route() {
    // 3x4: a six-cell route along the top row through water, and an
    // eight-cell dry snake through the lower rows.
    let mut g = Grid::new(3, 4).unwrap();
    let top = [(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3)];
    let snake = [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (1, 2), (2, 2), (2, 3)];
    for route in [&top[..], &snake[..]] {
        for w in route.windows(2) {
            let ((r, c), (nr, nc)) = (w[0], w[1]);
            g.carve_passage(Pos::new(r, c), Pos::new(nr, nc)).unwrap();
        }
    }
    g.set_terrain(Pos::new(0, 2), Terrain::Water).unwrap();
    let mut s = Solver::new(&g);

    assert!(s.solve(&g, Algorithm::Bfs));
    assert_eq!(s.path_length(), 6);
    assert!(s.on_final_path(Pos::new(0, 2)));
    assert_eq!(s.path_cost(), 15);

    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        assert!(s.solve(&g, a));
        assert_eq!(s.path_length(), 8, "{a}");
        assert!(!s.on_final_path(Pos::new(0, 2)), "{a}");
        assert_eq!(s.path_cost(), 8);
    }
}

#[test]
fn alternative_takes_the_other_branch() {
    // A ring around a walled-off middle: two equal routes.
    let mut g = Grid::new(3, 3).unwrap();
    let ring: [(i32, i32); 8] = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)];
    for (i, &(r, c)) in ring.iter().enumerate().take(7) {
        let (nr, nc) = ring[i + 1];
        g.carve_passage(Pos::new(r, c), Pos::new(nr, nc)).unwrap();
    }
    let before = weights(&g);
    let mut s = Solver::new(&g);

    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        assert!(s.solve(&g, a));
        let primary = s.path().to_vec();
        assert!(s.solve_alternative(&g, a, &primary));
        let alt = s.path().to_vec();
        let interior = |p: &[Pos]| p[1..p.len() - 1].to_vec();
        assert!(interior(&alt).iter().all(|p| !primary.contains(p)), "{a}");
        assert_eq!(s.path_cost(), 5);
        assert_eq!(weights(&g), before);
    }
}

#[test]
fn alternative_on_perfect_maze_reuses_the_only_path() {
    let g = generated(12, 12, 4, None, true);
    assert!(is_perfect(&g));
    let mut s = Solver::new(&g);
    assert!(s.solve(&g, Algorithm::Dijkstra));
    let primary = s.path().to_vec();
    let cost = s.path_cost();
    assert!(s.solve_alternative(&g, Algorithm::Dijkstra, &primary));
    assert_eq!(s.path(), primary.as_slice());
    assert_eq!(s.path_cost(), cost);
}

#[test]
fn alternative_failure_leaves_weights_alone() {
    let mut g = Grid::new(2, 2).unwrap();
    g.carve_passage(Pos::new(0, 0), Pos::new(0, 1)).unwrap();
    g.set_weight(Pos::new(0, 1), 3).unwrap();
    let before = weights(&g);
    let mut s = Solver::new(&g);
    for a in Algorithm::ALL {
        assert!(!s.solve_alternative(&g, a, &[Pos::new(0, 0), Pos::new(0, 1)]));
        assert_eq!(weights(&g), before);
    }
}

#[test]
fn dfs_finds_a_valid_path_in_a_loopy_maze() {
    let g = generated(15, 15, 21, Some(0.2), false);
    let mut s = Solver::new(&g);
    assert!(s.solve(&g, Algorithm::Dfs));
    let path = s.path();
    for w in path.windows(2) {
        assert!(g.is_open(w[0], w[1]));
    }
    let mut bfs = Solver::new(&g);
    assert!(bfs.solve(&g, Algorithm::Bfs));
    assert!(s.path_length() >= bfs.path_length());
}

proptest! {
    #[test]
    fn bfs_matches_weighted_on_uniform_weights(seed in any::<u64>(), rows in 2i32..16, cols in 2i32..16) {
        let g = generated(rows, cols, seed, Some(0.15), false);
        let mut s = Solver::new(&g);
        prop_assert!(s.solve(&g, Algorithm::Bfs));
        let hops = s.path_length();
        for a in [Algorithm::Dijkstra, Algorithm::AStar] {
            prop_assert!(s.solve(&g, a));
            prop_assert_eq!(s.path_length(), hops);
            prop_assert_eq!(s.path_cost(), hops as i64);
        }
    }

    #[test]
    fn astar_cost_matches_dijkstra(seed in any::<u64>(), rows in 2i32..16, cols in 2i32..16) {
        let g = generated(rows, cols, seed, Some(0.1), true);
        let mut s = Solver::new(&g);
        prop_assert!(s.solve(&g, Algorithm::Dijkstra));
        let cost = s.path_cost();
        let explored = s.cells_explored();
        prop_assert!(s.solve(&g, Algorithm::AStar));
        prop_assert_eq!(s.path_cost(), cost);
        prop_assert!(s.cells_explored() <= explored);
    }

    #[test]
    fn weighted_traces_settle_each_cell_once(seed in any::<u64>(), rows in 2i32..18, cols in 2i32..18) {
        let g = generated(rows, cols, seed, Some(0.2), true);
        let mut s = Solver::new(&g);
        for a in [Algorithm::Dijkstra, Algorithm::AStar] {
            prop_assert!(s.solve(&g, a));
            let mut cells = s.trace().to_vec();
            cells.sort();
            cells.dedup();
            prop_assert_eq!(cells.len(), s.trace().len());
            prop_assert_eq!(s.cells_explored(), s.trace().len());
            prop_assert!(s.trace().iter().all(|&p| s.is_searched(p)));
        }
    }

    #[test]
    fn alternative_search_restores_weights(seed in any::<u64>(), alg in 0usize..4) {
        let g = generated(10, 10, seed, Some(0.1), true);
        let before = weights(&g);
        let algorithm = Algorithm::ALL[alg];
        let mut s = Solver::new(&g);
        prop_assert!(s.solve(&g, algorithm));
        let primary = s.path().to_vec();
        for _ in 0..3 {
            prop_assert!(s.solve_alternative(&g, algorithm, &primary));
            prop_assert_eq!(weights(&g), before.clone());
            let expected: i64 = s.path().iter().map(|&p| g.weight(p).unwrap() as i64).sum();
            prop_assert_eq!(s.path_cost(), expected);
        }
    }
}

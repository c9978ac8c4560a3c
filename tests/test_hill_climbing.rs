use queensearch::{
    board::{Board, BoardGeneration},
    local_search::{HillClimbing, LocalSearch, Neighborhood},
    outcome::Outcome,
    rng::RandomNumberGenerator,
    state::State,
    successor::{better_successors, GoalBoundary},
};

#[test]
fn test_known_four_queens_solution_returns_immediately() {
    let board = Board::new(vec![1, 3, 0, 2]).unwrap();
    assert_eq!(board.cost(), 0);

    let mut rng = RandomNumberGenerator::from_seed(100);
    let result = HillClimbing::new().search(board.clone(), &mut rng).unwrap();

    assert_eq!(result.outcome(), Outcome::Solved);
    assert_eq!(result.steps(), 0);
    assert_eq!(result.terminal_board(), &board);
}

#[test]
fn test_stacked_four_queens_has_an_improving_move() {
    let board = Board::new(vec![0, 0, 0, 0]).unwrap();
    assert_eq!(board.cost(), 6);

    let state = State::new(board.clone());
    assert!(!better_successors(&state, GoalBoundary::Inclusive).is_empty());

    let mut rng = RandomNumberGenerator::from_seed(101);
    let result = HillClimbing::new().search(board, &mut rng).unwrap();
    assert!(result.steps() > 0);
    assert!(result.cost() < 6);
}

#[test]
fn test_random_restarts_find_solutions() {
    // Classic N-Queens is solvable for these sizes; enough independent
    // climbs with sideways moves should find a solution for each.
    let mut rng = RandomNumberGenerator::from_seed(102);
    let climber = HillClimbing::new().with_sideways_limit(20);

    for size in [4, 5, 8] {
        let solved = (0..200).find_map(|_| {
            let board = Board::random(size, BoardGeneration::Permutation, &mut rng).unwrap();
            let result = climber.climb(board, &mut rng).unwrap();
            result.is_solved().then(|| result.terminal_board().clone())
        });

        let solution = solved.unwrap_or_else(|| panic!("No solution found for n = {}", size));
        assert_eq!(solution.size(), size);
        assert_eq!(solution.cost(), 0);
    }
}

#[test]
fn test_cost_never_rises_above_initial() {
    let mut rng = RandomNumberGenerator::from_seed(103);
    let neighborhoods = [
        Neighborhood::SteepestAscent,
        Neighborhood::ImprovingBucket,
        Neighborhood::Sampled { samples: 16 },
    ];

    for neighborhood in neighborhoods {
        let climber = HillClimbing::new().with_neighborhood(neighborhood).unwrap();
        for _ in 0..25 {
            let board = Board::random(10, BoardGeneration::Independent, &mut rng).unwrap();
            let initial = board.cost();
            let result = climber.climb(board, &mut rng).unwrap();
            assert!(result.cost() <= initial);
            match result.outcome() {
                Outcome::Solved => assert_eq!(result.cost(), 0),
                Outcome::Peaked => assert!(result.cost() > 0),
            }
        }
    }
}

#[test]
fn test_search_cost_counts_full_sweeps() {
    let mut rng = RandomNumberGenerator::from_seed(104);
    let board = Board::random(7, BoardGeneration::Permutation, &mut rng).unwrap();
    let result = HillClimbing::new().climb(board, &mut rng).unwrap();
    let examined = result.search_cost().unwrap();
    assert_eq!(examined % (7 * 6), 0);
}

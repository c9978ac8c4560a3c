use queensearch::{
    board::Board,
    breeding::{crossover_at, BreedStrategy, StarBreeding},
    error::QueensError,
    evolution::{EvolutionLauncher, EvolutionOptions},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy},
    state::State,
};

fn population(boards: &[&[usize]]) -> Vec<State> {
    boards
        .iter()
        .map(|rows| State::new(Board::new(rows.to_vec()).unwrap()))
        .collect()
}

#[test]
fn test_selection_of_six_keeps_four() {
    let population = population(&[
        &[0, 0, 0, 0, 0],
        &[0, 2, 4, 1, 3],
        &[4, 3, 2, 1, 0],
        &[0, 1, 0, 1, 0],
        &[1, 3, 0, 2, 4],
        &[2, 2, 2, 2, 2],
    ]);

    let selected = ElitistSelection::new().select(&population).unwrap();

    assert_eq!(selected.len(), 4);
    assert!(selected.windows(2).all(|w| w[0].cost() <= w[1].cost()));
    assert_eq!(
        selected[0].cost(),
        population.iter().map(State::cost).min().unwrap()
    );
}

#[test]
fn test_one_generation_keeps_population_size() {
    let mut rng = RandomNumberGenerator::from_seed(200);
    let population = population(&[
        &[0, 0, 0, 0, 0, 0],
        &[5, 4, 3, 2, 1, 0],
        &[1, 1, 1, 1, 1, 1],
        &[0, 2, 4, 0, 2, 4],
        &[3, 3, 3, 0, 0, 0],
        &[0, 1, 2, 3, 4, 5],
    ]);

    let selected = ElitistSelection::new().select(&population).unwrap();
    let next = StarBreeding::new(0.3)
        .unwrap()
        .breed(&selected, &mut rng)
        .unwrap();

    assert_eq!(next.len(), 2 * (selected.len() - 1));
    assert_eq!(next.len(), population.len());
}

#[test]
fn test_crossover_split_reproduces_parents() {
    let p1 = Board::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
    let p2 = Board::new(vec![7, 7, 7, 7, 0, 0, 0, 0]).unwrap();

    for split in 0..=8 {
        let (a, b) = crossover_at(&p1, &p2, split).unwrap();
        assert_eq!(a.rows()[..split], p1.rows()[..split]);
        assert_eq!(a.rows()[split..], p2.rows()[split..]);
        assert_eq!(b.rows()[..split], p2.rows()[..split]);
        assert_eq!(b.rows()[split..], p1.rows()[split..]);
    }
}

#[test]
fn test_genetic_solves_six_queens_with_mutation() {
    let mut rng = RandomNumberGenerator::from_seed(201);
    let options = EvolutionOptions::builder()
        .population_size(40)
        .max_generations(Some(200_000))
        .build()
        .unwrap();

    let result = EvolutionLauncher::genetic(1.0)
        .unwrap()
        .evolve(&options, 6, &mut rng)
        .unwrap();

    assert!(result.is_solved());
    assert_eq!(result.terminal_board().cost(), 0);
}

#[test]
fn test_genetic_respects_generation_cap() {
    let mut rng = RandomNumberGenerator::from_seed(202);
    let stuck = population(&[&[0, 0, 0, 0, 0, 0], &[0, 0, 0, 0, 0, 0]]);

    let result = EvolutionLauncher::new(ElitistSelection::new(), StarBreeding::without_mutation())
        .evolve_population(stuck, Some(3), &mut rng);

    match result {
        Err(QueensError::NotConverged { steps }) => assert_eq!(steps, 3),
        _ => panic!("Expected NotConverged error"),
    }
}

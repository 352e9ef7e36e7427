use seabattle::{
    BoardState, FleetLayoutGenerator, HuntPlayer, MatchSession, MatchStatus, OwnershipGrid, Player,
    RandomPlayer, ShotGrid, ShotOutcome,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(seed: u64, mut players: [Box<dyn Player>; 2]) -> (MatchSession<usize>, usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = MatchSession::generate(0, 1, &FleetLayoutGenerator::new(), &mut rng).unwrap();
    let mut turns = 0;
    while session.status() == MatchStatus::InProgress {
        turns += 1;
        assert!(turns <= 400, "match took too many turns");
        let seat = session.state().current_turn();
        let shots = *session.board(1 - seat).unwrap().shots();
        let (x, y) = players[seat].select_target(&mut rng, &shots);
        let outcome = session.fire(seat, x as i32, y as i32).unwrap();
        assert!(outcome.is_accepted(), "player chose a used cell ({}, {})", x, y);
        players[seat].handle_outcome((x, y), outcome);
    }
    (session, turns)
}

#[test]
fn test_random_player_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = RandomPlayer::new();
    let mut shots = ShotGrid::default();
    for _ in 0..100 {
        let (x, y) = player.select_target(&mut rng, &shots);
        assert_eq!(shots.get(x, y), Ok(false));
        shots.set(x, y, true).unwrap();
    }
    assert!(shots.iter().all(|(_, s)| s));
}

#[test]
fn test_hunt_player_follows_up_a_hit() {
    let mut grid = OwnershipGrid::default();
    for x in 3..6 {
        grid.set(x, 4, 2).unwrap();
    }
    let mut board = BoardState::new(grid);
    let mut rng = SmallRng::seed_from_u64(2);
    let mut player = HuntPlayer::new();

    assert_eq!(board.apply_shot(4, 4), ShotOutcome::Hit { sunk: false });
    player.handle_outcome((4, 4), ShotOutcome::Hit { sunk: false });

    // Orthogonal neighbours of the hit come before any random search.
    let next = player.select_target(&mut rng, board.shots());
    assert!([(3, 4), (5, 4), (4, 3), (4, 5)].contains(&next));
}

#[test]
fn test_hunt_player_finishes_the_ship() {
    let mut grid = OwnershipGrid::default();
    for x in 3..6 {
        grid.set(x, 4, 2).unwrap();
    }
    grid.set(0, 0, 1).unwrap();
    let mut board = BoardState::new(grid);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut player = HuntPlayer::new();

    let outcome = board.apply_shot(3, 4);
    player.handle_outcome((3, 4), outcome);
    let mut shots_taken = 0;
    while !board.is_sunk(2) {
        let (x, y) = player.select_target(&mut rng, board.shots());
        let outcome = board.apply_shot(x as i32, y as i32);
        assert!(outcome.is_accepted());
        player.handle_outcome((x, y), outcome);
        shots_taken += 1;
        assert!(shots_taken <= 6, "hunt player wandered off the wounded ship");
    }
}

#[test]
fn test_matches_finish_with_a_winner() {
    for seed in 0..20 {
        let (session, _) = play(seed, [Box::new(HuntPlayer::new()), Box::new(RandomPlayer::new())]);
        assert_eq!(session.status(), MatchStatus::Finished);
        let winner = session.winner().unwrap();
        assert!(session.board(1 - winner).unwrap().is_exhausted());
    }
}

#[test]
fn test_hunt_player_beats_random_on_average() {
    let mut hunt_wins = 0;
    for seed in 0..40 {
        let (session, _) = play(seed, [Box::new(HuntPlayer::new()), Box::new(RandomPlayer::new())]);
        if session.winner() == Some(0) {
            hunt_wins += 1;
        }
    }
    assert!(hunt_wins > 20, "hunt player won only {} of 40", hunt_wins);
}

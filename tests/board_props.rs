use std::collections::BTreeSet;

use seabattle::{BoardState, FleetLayoutGenerator, ShotOutcome, BOARD_SIZE, NUM_SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> BoardState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let layout = FleetLayoutGenerator::new().generate(&mut rng).unwrap();
    let mut board = BoardState::new(layout);
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let x = rng.random_range(0..BOARD_SIZE as i32);
        let y = rng.random_range(0..BOARD_SIZE as i32);
        board.apply_shot(x, y);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeated_shot_is_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE as i32, y in 0..BOARD_SIZE as i32) {
        let mut board = random_board(seed);
        board.apply_shot(x, y);
        let before = board;
        prop_assert_eq!(board.apply_shot(x, y), ShotOutcome::AlreadyShot);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_never_mutates(seed in any::<u64>(), x in -50i32..50, y in -50i32..50) {
        prop_assume!(!(0..BOARD_SIZE as i32).contains(&x) || !(0..BOARD_SIZE as i32).contains(&y));
        let mut board = random_board(seed);
        let before = board;
        prop_assert_eq!(board.apply_shot(x, y), ShotOutcome::OutOfBounds);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn ships_remaining_tracks_sinkings(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = FleetLayoutGenerator::new().generate(&mut rng).unwrap();
        let mut board = BoardState::new(layout);
        prop_assert_eq!(board.ships_remaining(), NUM_SHIPS);

        let mut sunk_ids = BTreeSet::new();
        let mut previous = board.ships_remaining();
        for _ in 0..(BOARD_SIZE * BOARD_SIZE * 2) {
            let x = rng.random_range(0..BOARD_SIZE as i32);
            let y = rng.random_range(0..BOARD_SIZE as i32);
            let outcome = board.apply_shot(x, y);
            let id = board.ownership().get(x as usize, y as usize).unwrap();
            match outcome {
                ShotOutcome::Hit { sunk: true } => {
                    prop_assert!(sunk_ids.insert(id));
                    prop_assert_eq!(board.ships_remaining(), previous - 1);
                    prop_assert!(board.ship_cells(id).all(|(cx, cy)| board.shots().get(cx, cy) == Ok(true)));
                }
                ShotOutcome::Hit { sunk: false } => {
                    prop_assert_eq!(board.ships_remaining(), previous);
                    prop_assert!(!board.is_sunk(id));
                }
                _ => {
                    prop_assert_eq!(board.ships_remaining(), previous);
                }
            }
            previous = board.ships_remaining();
        }
        prop_assert_eq!(board.ships_remaining(), NUM_SHIPS - sunk_ids.len());
    }

    #[test]
    fn shots_are_monotonic(seed in any::<u64>(), x in 0..BOARD_SIZE as i32, y in 0..BOARD_SIZE as i32) {
        let mut board = random_board(seed);
        let before = *board.shots();
        board.apply_shot(x, y);
        for ((cx, cy), shot) in before.iter() {
            if shot {
                prop_assert_eq!(board.shots().get(cx, cy), Ok(true));
            }
        }
        prop_assert_eq!(board.shots().get(x as usize, y as usize), Ok(true));
    }
}

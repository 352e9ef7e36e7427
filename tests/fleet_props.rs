use seabattle::grid::chebyshev;
use seabattle::{validate_layout, FleetLayoutGenerator, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_layouts_are_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = FleetLayoutGenerator::new().generate(&mut rng).unwrap();
        prop_assert_eq!(validate_layout(&grid), Ok(()));
        prop_assert_eq!(grid.positions(|v| v != 0).count(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn different_ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = FleetLayoutGenerator::new().generate(&mut rng).unwrap();
        let occupied: Vec<_> = grid.iter().filter(|&(_, id)| id != 0).collect();
        for &(a, id_a) in &occupied {
            for &(b, id_b) in &occupied {
                if id_a != id_b {
                    prop_assert!(chebyshev(a, b) >= 2);
                }
            }
        }
    }
}

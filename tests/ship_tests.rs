use seabattle::{Orientation, Placement, PlacementError};

#[test]
fn test_cells_follow_orientation() -> Result<(), PlacementError> {
    let horizontal = Placement::new(3, Orientation::Horizontal, 2, 5)?;
    assert_eq!(horizontal.cells().collect::<Vec<_>>(), vec![(2, 5), (3, 5), (4, 5)]);

    let vertical = Placement::new(4, Orientation::Vertical, 0, 0)?;
    assert_eq!(
        vertical.cells().collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (0, 2), (0, 3)]
    );
    assert_eq!(vertical.origin(), (0, 0));
    assert_eq!(vertical.size(), 4);
    Ok(())
}

#[test]
fn test_out_of_bounds_placement() {
    assert_eq!(
        Placement::new(4, Orientation::Horizontal, 7, 0).unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        Placement::new(2, Orientation::Vertical, 3, 9).unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        Placement::new(0, Orientation::Vertical, 3, 3).unwrap_err(),
        PlacementError::EmptyShip
    );
    assert!(Placement::new(4, Orientation::Horizontal, 6, 9).is_ok());
}

#[test]
fn test_huge_anchor_is_out_of_bounds() {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        assert_eq!(
            Placement::new(4, orientation, usize::MAX, usize::MAX).unwrap_err(),
            PlacementError::OutOfBounds
        );
        assert_eq!(
            Placement::new(usize::MAX, orientation, 1, 1).unwrap_err(),
            PlacementError::OutOfBounds
        );
    }
}

#[test]
fn test_max_anchor() {
    assert_eq!(Placement::max_anchor(4, Orientation::Horizontal), (6, 9));
    assert_eq!(Placement::max_anchor(1, Orientation::Vertical), (9, 9));
    assert_eq!(Placement::max_anchor(3, Orientation::Vertical), (9, 7));
}

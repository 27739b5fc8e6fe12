use salvo::{
    Coord, GameError, PlacementError, Player, Segment, ShotOutcome, SHIPS,
};

fn at(label: &str) -> Coord {
    salvo::parse_coord(label).unwrap()
}

/// A full fleet laid out on alternate rows.
fn deployed(name: &str) -> Player {
    let mut p = Player::new(name);
    let rows = [("A1", "A5"), ("C1", "C4"), ("E1", "E3"), ("G1", "G3"), ("I1", "I2")];
    for (def, (a, b)) in SHIPS.into_iter().zip(rows) {
        p.place_ship(def, Segment::new(at(a), at(b))).unwrap();
    }
    p
}

#[test]
fn test_deployment_tracks_fleet() {
    let mut p = Player::new("tester");
    assert!(!p.is_deployed());
    p.place_ship(SHIPS[4], Segment::new(at("J9"), at("J10"))).unwrap();
    assert!(!p.is_deployed());
    assert_eq!(p.fleet().len(), 1);
    assert!(deployed("x").is_deployed());
}

#[test]
fn test_place_ship_rejects_bad_segments() {
    let mut p = Player::new("tester");
    p.place_ship(SHIPS[0], Segment::new(at("A1"), at("A5"))).unwrap();
    assert_eq!(
        p.place_ship(SHIPS[4], Segment::new(at("B1"), at("B2"))),
        Err(GameError::InvalidPlacement(PlacementError::Touching))
    );
    assert_eq!(
        p.place_ship(SHIPS[4], Segment::new(at("A5"), at("A6"))),
        Err(GameError::InvalidPlacement(PlacementError::Crossing))
    );
    assert_eq!(p.fleet().len(), 1);
    assert_eq!(p.board().ship_map().count_ones(), 5);
}

#[test]
fn test_hit_then_sunk() {
    let mut p = deployed("tester");
    assert_eq!(p.apply_shot(at("I1")), Ok(ShotOutcome::Hit));
    assert_eq!(p.apply_shot(at("I2")), Ok(ShotOutcome::Sunk("Destroyer")));
    assert_eq!(p.fleet().len(), 4);
    assert_eq!(p.sunk(), &["Destroyer"]);
}

#[test]
fn test_miss() {
    let mut p = deployed("tester");
    assert_eq!(p.apply_shot(at("B1")), Ok(ShotOutcome::Miss));
    assert_eq!(p.fleet().len(), 5);
}

#[test]
fn test_repeat_changes_nothing() {
    let mut p = deployed("tester");
    p.apply_shot(at("A1")).unwrap();
    p.apply_shot(at("J10")).unwrap();
    let board = *p.board();
    let fleet = p.fleet().to_vec();

    assert_eq!(p.apply_shot(at("A1")), Ok(ShotOutcome::Repeat));
    assert_eq!(p.apply_shot(at("J10")), Ok(ShotOutcome::Repeat));
    assert_eq!(p.board(), &board);
    assert_eq!(p.fleet(), fleet.as_slice());
}

#[test]
fn test_defeated_after_every_cell_hit() {
    let mut p = deployed("tester");
    let cells: Vec<Coord> = p
        .fleet()
        .iter()
        .flat_map(|s| s.intact_cells().to_vec())
        .collect();
    let mut sunk = 0;
    for c in cells {
        assert!(!p.is_defeated());
        if let ShotOutcome::Sunk(_) = p.apply_shot(c).unwrap() {
            sunk += 1;
        }
    }
    assert_eq!(sunk, 5);
    assert!(p.is_defeated());
    assert_eq!(p.sunk().len(), 5);
}

use salvo::{Coord, Direction, Orientation, Segment, Ship, ShipDef, SHIPS, TOTAL_SHIP_CELLS};

fn at(label: &str) -> Coord {
    salvo::parse_coord(label).unwrap()
}

#[test]
fn test_segment_normalizes_endpoints() {
    let seg = Segment::new(at("A5"), at("A1"));
    assert_eq!(seg.start(), at("A1"));
    assert_eq!(seg.end(), at("A5"));
    assert_eq!(seg.len(), 5);
    assert!(seg.is_aligned());
    assert_eq!(seg.orientation(), Orientation::Horizontal);
    assert_eq!(seg.to_string(), "A1-A5");
}

#[test]
fn test_segment_cells_vertical() {
    let seg = Segment::new(at("D7"), at("B7"));
    let cells: Vec<String> = seg.cells().map(|c| c.to_string()).collect();
    assert_eq!(cells, vec!["B7", "C7", "D7"]);
    assert_eq!(seg.orientation(), Orientation::Vertical);
}

#[test]
fn test_diagonal_segment_is_not_aligned() {
    let seg = Segment::new(at("A1"), at("B2"));
    assert!(!seg.is_aligned());
}

#[test]
fn test_from_origin_directions() {
    let origin = at("E5");
    let fwd = Segment::from_origin(origin, Orientation::Horizontal, Direction::Forward, 3).unwrap();
    assert_eq!(fwd, Segment::new(at("E5"), at("E7")));
    let back = Segment::from_origin(origin, Orientation::Vertical, Direction::Backward, 4).unwrap();
    assert_eq!(back, Segment::new(at("B5"), at("E5")));
}

#[test]
fn test_from_origin_off_board() {
    let corner = at("J10");
    assert!(Segment::from_origin(corner, Orientation::Horizontal, Direction::Forward, 2).is_none());
    assert!(Segment::from_origin(corner, Orientation::Vertical, Direction::Forward, 2).is_none());
    assert!(Segment::from_origin(at("A2"), Orientation::Horizontal, Direction::Backward, 3).is_none());
    assert!(Segment::from_origin(corner, Orientation::Vertical, Direction::Backward, 5).is_some());
}

#[test]
fn test_ship_takes_damage_until_sunk() {
    let def = ShipDef::new("Destroyer", 2);
    let mut ship = Ship::new(def, Segment::new(at("C3"), at("C4")));
    assert_eq!(ship.name(), "Destroyer");
    assert_eq!(ship.intact_cells().len(), 2);

    assert!(!ship.remove_part(at("C5")));
    assert!(ship.remove_part(at("C3")));
    assert!(!ship.remove_part(at("C3")));
    assert!(!ship.is_sunk());
    assert!(ship.contains(at("C4")));

    assert!(ship.remove_part(at("C4")));
    assert!(ship.is_sunk());
    assert_eq!(ship.length(), 2);
}

#[test]
fn test_fleet_configuration() {
    let lengths: Vec<usize> = SHIPS.iter().map(|d| d.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(SHIPS[0].name(), "Aircraft Carrier");
}

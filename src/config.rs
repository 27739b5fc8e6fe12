use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;

/// Deployment order used by both sides.
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Aircraft Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

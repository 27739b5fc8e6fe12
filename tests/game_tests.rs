use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    place_all_vessels, run_battle, Battle, Board, Commander, Coord, GameError, GameStatus,
    IntermediateAi, Player, Segment, ShotOutcome, Side, SHIPS,
};

fn at(label: &str) -> Coord {
    salvo::parse_coord(label).unwrap()
}

const LAYOUT: [(&str, &str); 5] = [("A1", "A5"), ("C1", "C4"), ("E1", "E3"), ("G1", "G3"), ("I1", "I2")];

fn deployed(name: &str) -> Player {
    let mut p = Player::new(name);
    for (def, (a, b)) in SHIPS.into_iter().zip(LAYOUT) {
        p.place_ship(def, Segment::new(at(a), at(b))).unwrap();
    }
    p
}

fn vessel_cells() -> Vec<Coord> {
    LAYOUT
        .iter()
        .flat_map(|&(a, b)| Segment::new(at(a), at(b)).cells().collect::<Vec<_>>())
        .collect()
}

/// Cells on the empty rows B, D, F, H and J.
fn open_water() -> Vec<Coord> {
    (0..100)
        .map(|i| Coord::from_index(i).unwrap())
        .filter(|c| c.row() % 2 == 1)
        .collect()
}

/// Fires a fixed list of cells, recording what it was told.
struct Scripted {
    shots: std::vec::IntoIter<Coord>,
    results: Vec<(Coord, ShotOutcome)>,
    incoming: usize,
    deaf: bool,
}

impl Scripted {
    fn new(shots: Vec<Coord>) -> Self {
        Self {
            shots: shots.into_iter(),
            results: Vec::new(),
            incoming: 0,
            deaf: false,
        }
    }
}

impl Commander for Scripted {
    fn deploy(&mut self, _rng: &mut SmallRng, _player: &mut Player) -> Result<(), GameError> {
        Ok(())
    }

    fn next_shot(
        &mut self,
        _rng: &mut SmallRng,
        _own: &Board,
        _enemy: &Board,
    ) -> Result<Coord, GameError> {
        self.shots.next().ok_or(GameError::PoolExhausted)
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), GameError> {
        self.results.push((coord, outcome));
        Ok(())
    }

    fn handle_incoming_shot(
        &mut self,
        _coord: Coord,
        _outcome: ShotOutcome,
    ) -> Result<(), GameError> {
        if self.deaf {
            return Err(GameError::OutputClosed);
        }
        self.incoming += 1;
        Ok(())
    }
}

#[test]
fn test_requires_deployed_fleets() {
    let err = Battle::new(deployed("ready"), Player::new("rookie")).unwrap_err();
    assert_eq!(err, GameError::FleetNotDeployed("rookie".to_string()));
}

#[test]
fn test_turns_alternate_and_repeats_fire_again() {
    let mut battle = Battle::new(deployed("one"), deployed("two")).unwrap();
    assert_eq!(battle.turn(), Side::First);

    assert_eq!(battle.fire(at("B1")), Ok(ShotOutcome::Miss));
    assert_eq!(battle.turn(), Side::Second);
    assert_eq!(battle.fire(at("A1")), Ok(ShotOutcome::Hit));
    assert_eq!(battle.turn(), Side::First);

    assert_eq!(battle.fire(at("A1")), Ok(ShotOutcome::Hit));
    assert_eq!(battle.turn(), Side::Second);
    assert_eq!(battle.fire(at("A1")), Ok(ShotOutcome::Repeat));
    assert_eq!(battle.turn(), Side::Second);
    assert_eq!(battle.shots_fired(Side::First), 2);
    assert_eq!(battle.shots_fired(Side::Second), 1);
    assert_eq!(battle.status(Side::First), GameStatus::InProgress);
}

#[test]
fn test_game_over_after_last_vessel() {
    let mut battle = Battle::new(deployed("one"), deployed("two")).unwrap();
    let hits = vessel_cells();
    let mut misses = open_water().into_iter();
    let last = hits.len() - 1;
    for (i, &c) in hits.iter().enumerate() {
        battle.fire(c).unwrap();
        if i < last {
            battle.fire(misses.next().unwrap()).unwrap();
        }
    }

    assert_eq!(battle.winner(), Some(Side::First));
    assert_eq!(battle.status(Side::First), GameStatus::Won);
    assert_eq!(battle.status(Side::Second), GameStatus::Lost);
    assert_eq!(battle.turn(), Side::First);
    assert_eq!(battle.fire(at("J10")), Err(GameError::GameOver));

    let report = battle.report();
    assert_eq!(report.first.shots, 17);
    assert_eq!(report.second.shots, 16);
    assert_eq!(report.second.vessels_afloat, 0);
    assert_eq!(report.second.vessels_lost.len(), 5);
    assert_eq!(report.first.vessels_afloat, 5);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["winner"], "First");
    assert_eq!(json["second"]["status"], "Lost");
}

#[test]
fn test_run_battle_notifies_both_commanders() {
    let mut battle = Battle::new(deployed("one"), deployed("two")).unwrap();
    let mut hits = vessel_cells();
    // a repeat costs nothing: the same side fires again
    hits.insert(1, hits[0]);
    let mut first = Scripted::new(hits);
    let mut second = Scripted::new(open_water());
    let mut rng = SmallRng::seed_from_u64(0);

    let winner = run_battle(&mut battle, &mut first, &mut second, &mut rng).unwrap();
    assert_eq!(winner, Side::First);
    assert_eq!(first.results.len(), 18);
    assert_eq!(first.results[1].1, ShotOutcome::Repeat);
    assert!(matches!(first.results.last(), Some((_, ShotOutcome::Sunk("Destroyer")))));
    assert_eq!(second.results.len(), 16);
    assert_eq!(second.incoming, 18);
    assert_eq!(first.incoming, 16);
}

#[test]
fn test_run_battle_stops_on_notification_failure() {
    let mut battle = Battle::new(deployed("one"), deployed("two")).unwrap();
    let mut first = Scripted::new(vessel_cells());
    let mut second = Scripted::new(open_water());
    second.deaf = true;
    let mut rng = SmallRng::seed_from_u64(0);

    let err = run_battle(&mut battle, &mut first, &mut second, &mut rng).unwrap_err();
    assert_eq!(err, GameError::OutputClosed);
    assert_eq!(battle.shots_fired(Side::First), 1);
    assert_eq!(first.results.len(), 1);
}

#[test]
fn test_ai_against_ai_finishes() {
    for seed in 0..8 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = Player::new("p1");
        let mut p2 = Player::new("p2");
        place_all_vessels(&mut p1, &mut rng).unwrap();
        place_all_vessels(&mut p2, &mut rng).unwrap();
        let mut battle = Battle::new(p1, p2).unwrap();

        let mut ai1 = IntermediateAi::new();
        let mut ai2 = IntermediateAi::new();
        let winner = run_battle(&mut battle, &mut ai1, &mut ai2, &mut rng).unwrap();

        assert!(battle.player(winner.other()).is_defeated());
        assert!(!battle.player(winner).is_defeated());
        assert!(battle.shots_fired(winner) <= 100);
        assert!(battle.shots_fired(winner) >= 17);
    }
}

use rand::{rngs::SmallRng, SeedableRng};
use salvo::{place_all_vessels, run_battle, Battle, IntermediateAi, Player};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut p1 = Player::new("player1");
    let mut p2 = Player::new("player2");
    place_all_vessels(&mut p1, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    place_all_vessels(&mut p2, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut ai1 = IntermediateAi::new();
    let mut ai2 = IntermediateAi::new();
    let mut battle = Battle::new(p1, p2).map_err(|e| anyhow::anyhow!(e))?;
    run_battle(&mut battle, &mut ai1, &mut ai2, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", serde_json::to_string(&battle.report())?);
    Ok(())
}

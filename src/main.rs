#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{init_logging, run_battle, Battle, CliCommander, Commander, IntermediateAi, Player, Side};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the intermediate AI at this terminal.
    Play {
        #[arg(long, help = "Player name (prompted for when omitted)")]
        name: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two AIs play each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { name, seed } => play(name, seed),
        Commands::Watch { seed } => watch(seed),
    }
}

#[cfg(feature = "std")]
fn play(name: Option<String>, seed: Option<u64>) -> anyhow::Result<()> {
    println!("\n========================================");
    println!("   BATTLESHIP - INTERMEDIATE AI");
    println!("========================================\n");

    let mut rng = make_rng(seed);
    let mut human = CliCommander::stdio();
    if !human.main_menu().map_err(|e| anyhow::anyhow!(e))? {
        println!("EXITING GAME. GOODBYE!");
        return Ok(());
    }
    let name = match name {
        Some(n) => n,
        None => human.ask_name().map_err(|e| anyhow::anyhow!(e))?,
    };

    let mut human_player = Player::new(name.clone());
    human
        .deploy(&mut rng, &mut human_player)
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("\nKINDLY WAIT WHILE THE MACHINE PLACES ITS SHIPS");
    let mut ai = IntermediateAi::new();
    let mut ai_player = Player::new("INTERMEDIATE AI");
    ai.deploy(&mut rng, &mut ai_player)
        .map_err(|e| anyhow::anyhow!(e))?;
    println!("THE MACHINE HAS COMPLETED PLACING ITS SHIPS!\n");

    let mut battle = Battle::new(human_player, ai_player).map_err(|e| anyhow::anyhow!(e))?;
    println!("THE GAME STARTS!\n");
    let winner = run_battle(&mut battle, &mut human, &mut ai, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("\n========================================");
    println!("   GAME OVER");
    println!("========================================\n");
    match winner {
        Side::First => println!(
            "CONGRATULATIONS {}, YOU HAVE WON THIS GAME OF BATTLESHIP!",
            name
        ),
        Side::Second => println!("THE INTERMEDIATE AI ENGINE WON THIS GAME OF BATTLESHIP!"),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn watch(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut ai1 = IntermediateAi::new();
    let mut ai2 = IntermediateAi::new();
    let mut p1 = Player::new("AI ONE");
    let mut p2 = Player::new("AI TWO");
    ai1.deploy(&mut rng, &mut p1).map_err(|e| anyhow::anyhow!(e))?;
    ai2.deploy(&mut rng, &mut p2).map_err(|e| anyhow::anyhow!(e))?;

    let mut battle = Battle::new(p1, p2).map_err(|e| anyhow::anyhow!(e))?;
    let winner = run_battle(&mut battle, &mut ai1, &mut ai2, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    for side in [Side::First, Side::Second] {
        let player = battle.player(side);
        println!(
            "{} ({} shots, lost: {:?})\n{}",
            player.name(),
            battle.shots_fired(side),
            player.sunk(),
            player.board().view(false)
        );
    }
    println!("{} wins", battle.player(winner).name());
    Ok(())
}

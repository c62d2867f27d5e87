use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use salvo::{
    init_logging, save_fleet, write_fleet, AiPlayer, CliPlayer, CsvTurnLog, Fleet, GameEngine,
    Match, MatchEnd, Player, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place your fleet and play against the bot.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "data", help = "Directory for fleet files and the turn log")]
        data_dir: PathBuf,
        #[arg(long, help = "Skip manual placement and use a random fleet")]
        random_fleet: bool,
    },
    /// Print a random valid fleet as CSV.
    Generate {
        #[arg(long, help = "Fix RNG seed for reproducible fleets")]
        seed: Option<u64>,
        #[arg(long, help = "Write to this file instead of stdout")]
        out: Option<PathBuf>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            data_dir,
            random_fleet,
        } => play(make_rng(seed), data_dir, random_fleet),
        Commands::Generate { seed, out } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let fleet = Fleet::random(&mut rng)?;
            match out {
                Some(path) => save_fleet(&fleet, path),
                None => write_fleet(&fleet, io::stdout()),
            }
        }
    }
}

fn play(mut rng: SmallRng, data_dir: PathBuf, random_fleet: bool) -> anyhow::Result<()> {
    println!("\n{}", "=".repeat(50));
    println!("BATTLESHIP");
    println!("{}", "=".repeat(50));
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("cannot create {}", data_dir.display()))?;

    println!("\nPhase 1: Place your ships");
    let mut human = CliPlayer::new().random_fleet(random_fleet);
    let Some(player_fleet) = human.place_ships(&mut rng)? else {
        println!("Ship placement cancelled.");
        return Ok(());
    };
    let player_path = data_dir.join("player_ships.csv");
    save_fleet(&player_fleet, &player_path)?;
    println!("Player ships saved to {}", player_path.display());

    println!("\nPhase 2: Generating bot ships...");
    let mut bot = AiPlayer::new();
    let bot_fleet = bot
        .place_ships(&mut rng)?
        .context("bot did not produce a fleet")?;
    let bot_path = data_dir.join("bot_ships.csv");
    save_fleet(&bot_fleet, &bot_path)?;
    println!("Bot ships generated and saved to {}", bot_path.display());

    let log_path = data_dir.join("game_state.csv");
    let mut turn_log = CsvTurnLog::create(&log_path)?;
    let engine = GameEngine::new(player_fleet, bot_fleet);
    let mut game = Match::new(engine, Box::new(human), Box::new(bot));

    println!("\n{}\nGAME START!\n{}", "=".repeat(50), "=".repeat(50));
    let end = game.run(&mut rng, &mut turn_log)?;
    println!("\n{}", salvo::ui::render_boards(game.engine()));
    match end {
        MatchEnd::Winner(Side::Player) => println!("\nCONGRATULATIONS! YOU WON!"),
        MatchEnd::Winner(Side::Bot) => println!("\nGAME OVER - BOT WINS :("),
        MatchEnd::Quit => println!("\nGame ended by player."),
    }

    println!("\n{}\nGAME STATISTICS\n{}", "=".repeat(50), "=".repeat(50));
    println!("Game log saved to: {}", log_path.display());
    println!("Total turns: {}", turn_log.rows());
    println!("\nThank you for playing Battleship!");
    Ok(())
}

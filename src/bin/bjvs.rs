//! Terminal front end: play blackjack against the AI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use bjvs::{
    ActionError, AssetCatalog, Card, Game, GameOptions, SoundCue, Suit, TableSnapshot, Winner,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bjvs", about = "Blackjack: player vs AI", version)]
struct Cli {
    /// Seed for the shuffle; defaults to the current time
    #[arg(long, env = "BJVS_SEED")]
    seed: Option<u64>,

    /// Maximum cards per hand
    #[arg(long, default_value_t = 5)]
    hand_limit: usize,

    /// The AI draws while its score is below this value
    #[arg(long, default_value_t = 14)]
    ai_threshold: u8,

    /// Disable the five-card Charlie rule
    #[arg(long)]
    no_charlie: bool,

    /// Directory holding images/ and sounds/
    #[arg(long, env = "BJVS_ASSETS")]
    assets: Option<PathBuf>,

    /// Ring the terminal bell on sound cues
    #[arg(long)]
    bell: bool,

    /// Log session events at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = GameOptions::default()
        .with_hand_limit(cli.hand_limit)
        .with_ai_stand_threshold(cli.ai_threshold)
        .with_five_card_charlie(!cli.no_charlie);

    let sounds = SoundOutput::new(cli.assets.as_deref().map(AssetCatalog::new), cli.bell);

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    println!("Blackjack: player vs AI");
    println!("[h]it  [s]tand  [r]estart  [q]uit");

    let mut game = Game::new(options, seed).context("invalid game options")?;

    loop {
        print_table(&game.snapshot());
        sounds.play(&game.take_cues());
        if let Some(outcome) = game.outcome() {
            println!("{}\n", colorize(outcome.message(), winner_color(outcome.winner)));
        }

        let input = prompt_line("> ")?;
        let result = match input.as_str() {
            "h" | "hit" => game.hit().map(|_| ()),
            "s" | "stand" => game.stand().map(|_| ()),
            "r" | "restart" => {
                game.start_session();
                Ok(())
            }
            "q" | "quit" => return Ok(()),
            "" => continue,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(()) => {}
            Err(ActionError::GameOver) => println!("Game over. Press [r] to play again."),
            Err(err) => println!("{err}"),
        }
    }
}

/// Maps sound cues to the terminal bell. A cue whose file is missing is skipped.
struct SoundOutput {
    catalog: Option<AssetCatalog>,
    bell: bool,
}

impl SoundOutput {
    fn new(catalog: Option<AssetCatalog>, bell: bool) -> Self {
        if let Some(catalog) = &catalog {
            let missing_images = catalog.missing_images();
            if !missing_images.is_empty() {
                log::warn!(
                    "{} image(s) missing under {}, using placeholders",
                    missing_images.len(),
                    catalog.root().display()
                );
            }

            for cue in catalog.missing_sounds() {
                log::warn!(
                    "sound {} missing under {}, cue will be silent",
                    cue.file_name(),
                    catalog.root().display()
                );
            }
        }

        Self { catalog, bell }
    }

    fn audible(&self, cue: SoundCue) -> bool {
        self.bell
            && cue != SoundCue::Hit
            && self
                .catalog
                .as_ref()
                .is_none_or(|catalog| catalog.sound_path(cue).is_some())
    }

    fn play(&self, cues: &[SoundCue]) {
        for &cue in cues {
            log::debug!("sound cue {}", cue.file_name());
            if self.audible(cue) {
                print!("\u{7}");
            }
        }
        let _ = io::stdout().flush();
    }
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("q".to_string());
    }
    Ok(input.trim().to_lowercase())
}

fn print_table(table: &TableSnapshot) {
    println!("\nDeck: {} cards remaining", table.cards_remaining);

    let ai_view = table
        .ai_cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    let ai_label = if table.outcome.is_some() {
        "AI"
    } else {
        "AI showing"
    };
    println!("{ai_label}: {ai_view} (value {})", table.ai_visible_value);

    let player_view = table
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("You: {player_view} (value {})\n", table.player_value);
}

const fn winner_color(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "32",
        Winner::Ai => "31",
        Winner::Draw => "33",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let rank = card.rank_label();
    let colored_rank = if card.rank == 1 || card.rank > 10 {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    let suit = card.suit.code().to_string();
    format!("{colored_rank}{}", colorize(&suit, color_code))
}

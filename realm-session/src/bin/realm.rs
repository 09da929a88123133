//! `realm` — terminal front end for the legend archive.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(clippy::pedantic)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use realm_core::catalog::CatalogEngine;
use realm_core::config::RealmConfig;
use realm_core::game::{Difficulty, FlipOutcome, GamePhase, MemoryMatch};
use realm_core::navigation::View;
use realm_core::persistence::StateStore;
use realm_core::types::{Category, Rarity, Record};
use realm_session::{DetailView, GameDriver, PresentationHooks, Session};
use realm_sync::ArchiveLoader;

#[derive(Parser)]
#[command(name = "realm")]
#[command(about = "Browse the legend archive and play memory match", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List records in a category
    Browse {
        /// Category to open; defaults to the last one browsed
        #[arg(short = 'c', long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        /// Rarity grade (S, A, B, C, D)
        #[arg(short, long)]
        rarity: Option<String>,

        /// Tag filter; repeat to require several
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List the filterable tags in a category
    Facets {
        /// Category to inspect
        #[arg(short = 'c', long)]
        category: String,
    },
    /// Show one record's detail page
    Show {
        /// Record name
        name: String,
    },
    /// Play memory match on the terminal
    Play {
        /// easy, normal, hard or expert
        #[arg(short, long, default_value = "easy")]
        difficulty: String,
    },
}

// ---------------------------------------------------------------------------
// Terminal hooks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Pane {
    View,
    Facets,
    Records,
    Board,
}

/// Keeps the latest frame for each pane; [`TerminalHooks::flush`] prints them.
#[derive(Default)]
struct TerminalHooks {
    frames: Mutex<BTreeMap<Pane, String>>,
}

impl TerminalHooks {
    fn set(&self, pane: Pane, frame: String) {
        self.frames.lock().insert(pane, frame);
    }

    fn flush(&self) {
        let frames = std::mem::take(&mut *self.frames.lock());
        for frame in frames.into_values() {
            println!("{frame}");
        }
    }
}

impl PresentationHooks for TerminalHooks {
    fn on_filter_changed(&self, visible: &[&Record]) {
        let mut out = format!("{} record(s)", visible.len());
        for record in visible {
            let rarity = record.rarity.map_or_else(|| "-".to_string(), |r| r.to_string());
            out.push_str(&format!("\n  [{rarity}] {}", record.name));
            if let Some(nickname) = &record.nickname {
                out.push_str(&format!(" \"{nickname}\""));
            }
        }
        self.set(Pane::Records, out);
    }

    fn on_facets_changed(&self, facets: &BTreeSet<String>) {
        let tags: Vec<&str> = facets.iter().map(String::as_str).collect();
        self.set(Pane::Facets, format!("tags: {}", tags.join(" | ")));
    }

    fn on_game_state_changed(&self, game: &MemoryMatch) {
        self.set(Pane::Board, render_board(game));
    }

    fn on_view_changed(&self, view: View) {
        self.set(Pane::View, format!("== {view} =="));
    }
}

fn render_board(game: &MemoryMatch) -> String {
    let mut out = match game.phase() {
        GamePhase::Setup => return "Choose a difficulty to start.".to_string(),
        GamePhase::Playing => format!(
            "score {}  time {}s  pairs {}/{}",
            game.score(),
            game.elapsed_secs(),
            game.matched_pairs(),
            game.total_pairs()
        ),
        GamePhase::Won { score, elapsed_secs } => {
            format!("You won! score {score} in {elapsed_secs}s")
        }
    };
    for row in game.tiles().chunks(game.columns().max(1)) {
        out.push('\n');
        for tile in row {
            let face = if tile.flipped || tile.matched {
                tile.icon.name().to_string()
            } else {
                format!("#{}", tile.position)
            };
            out.push_str(&format!(" {face:<14}"));
        }
    }
    out
}

fn render_detail(detail: &DetailView) -> String {
    let record = &detail.record;
    let mut out = format!("{} ({})", record.name, record.category);
    if let Some(nickname) = &record.nickname {
        out.push_str(&format!("\n  title:  {nickname}"));
    }
    if let Some(rarity) = record.rarity {
        out.push_str(&format!("\n  rarity: {rarity}"));
    }
    out.push_str(&format!("\n  image:  {}", record.main_image_url));
    out.push_str(&format!("\n  tags:   {}", record.tag_tokens().collect::<Vec<_>>().join(", ")));
    for (slot, url) in detail.carousel.images().enumerate() {
        let marker = if Some(slot) == detail.carousel.active_index() { '*' } else { ' ' };
        out.push_str(&format!("\n  {marker} {url}"));
    }
    if !record.story.is_empty() {
        out.push_str(&format!("\n\n{}", record.story));
    }
    out
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Facet tags for `category`, read without a session so nothing is saved.
fn list_facets(records: Vec<Record>, category: Category) -> BTreeSet<String> {
    CatalogEngine::new(records, category).facet_tags().clone()
}

async fn open_session(config: &RealmConfig, hooks: Arc<TerminalHooks>) -> anyhow::Result<Session> {
    let loaded = ArchiveLoader::from_config(&config.archive).load().await;
    info!(origin = ?loaded.origin, records = loaded.records.len(), "Archive ready");
    let store = StateStore::from_config(&config.persistence).context("opening state store")?;
    Ok(Session::new(loaded.records, hooks).with_store(store))
}

async fn play(config: &RealmConfig, hooks: Arc<TerminalHooks>, difficulty: Difficulty) -> anyhow::Result<()> {
    let mut driver = GameDriver::new(&config.game, hooks.clone());
    driver.start(difficulty);
    hooks.flush();
    println!("Enter a tile number to flip it, 'n' for a new board, 'q' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" => break,
            "n" => driver.start(difficulty),
            input => match input.parse::<usize>() {
                Ok(index) => match driver.flip(index) {
                    Ok(FlipOutcome::Won { .. }) => {
                        hooks.flush();
                        return Ok(());
                    }
                    Ok(_) => {}
                    Err(e) => println!("{e}"),
                },
                Err(_) => println!("Not a tile number: {input}"),
            },
        }
        hooks.flush();
    }
    driver.reset();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RealmConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RealmConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.general.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let hooks = Arc::new(TerminalHooks::default());

    match cli.command {
        Commands::Browse {
            category,
            search,
            rarity,
            tags,
        } => {
            let mut session = open_session(&config, hooks.clone()).await?;
            match category {
                Some(name) => session.select_category(name.parse::<Category>()?),
                None => {
                    if session.restore().category.is_none() {
                        anyhow::bail!("no category given and none saved; pass --category");
                    }
                    session.go_to(View::Archive);
                }
            }
            if let Some(text) = search {
                session.set_search(&text);
            }
            if let Some(grade) = rarity {
                session.toggle_rarity(grade.parse::<Rarity>()?);
            }
            for tag in &tags {
                session.toggle_tag(tag);
            }
            hooks.flush();
        }
        Commands::Facets { category } => {
            let category = category.parse::<Category>()?;
            let loaded = ArchiveLoader::from_config(&config.archive).load().await;
            let facets = list_facets(loaded.records, category);
            if facets.is_empty() {
                println!("No tags in {category}");
            }
            for tag in facets {
                println!("{tag}");
            }
        }
        Commands::Show { name } => {
            let mut session = open_session(&config, hooks.clone()).await?;
            match session.show_detail(&name) {
                Some(detail) => println!("{}", render_detail(&detail)),
                None => eprintln!("No record named {name:?}"),
            }
        }
        Commands::Play { difficulty } => {
            play(&config, hooks, difficulty.parse::<Difficulty>()?).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use realm_core::carousel::Carousel;

    #[test]
    fn facets_listing_covers_only_the_category() {
        let records = vec![
            Record::new(Category::Monster, "Slime").with_tags("Slow, Weak"),
            Record::new(Category::Pet, "Ember Fox").with_tags("Fire"),
        ];
        let facets: Vec<String> = list_facets(records, Category::Monster).into_iter().collect();
        assert_eq!(facets, vec!["Slow", "Weak"]);
    }

    #[test]
    fn detail_render_marks_active_image() {
        let record = Record::new(Category::Monster, "Slime")
            .with_nickname("The Goo")
            .with_rarity(Rarity::C)
            .with_tags("Slow, Weak")
            .with_images("slime.png", ["s1.png", "s2.png"])
            .with_story("Jiggles.");
        let carousel = Carousel::new(record.extra_images.iter().cloned());
        let text = render_detail(&DetailView { record, carousel });

        assert!(text.starts_with("Slime (Monster)"));
        assert!(text.contains("\n  title:  The Goo"));
        assert!(text.contains("\n  rarity: C"));
        assert!(text.contains("\n  tags:   Slow, Weak"));
        assert!(text.contains("\n    s1.png"));
        assert!(text.contains("\n  * s2.png"));
        assert!(text.ends_with("\n\nJiggles."));
    }

    #[test]
    fn board_render_hides_face_down_tiles() {
        let mut game = MemoryMatch::new();
        assert_eq!(render_board(&game), "Choose a difficulty to start.");

        game.start(Difficulty::Easy);
        game.flip_tile(0).expect("flip");
        let text = render_board(&game);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "score 0  time 0s  pairs 0/4");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(&format!(" {:<14}", game.tiles()[0].icon.name())));
        assert!(lines[1].contains("#1"));
    }
}

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use macro_core::{
    build_with, parse_ranking, validate_ranking, Ability, ActionKind, BuildOptions,
    GLOBAL_COOLDOWN_FLOOR,
};
use spellbook::{format_spell_table, load_spellbook, save_spellbook, write_macro, Spellbook};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "macro_cli", about = "Rotation macro builder", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty spellbook for a class.
    New {
        #[arg(long)]
        spellbook: PathBuf,
        #[arg(long = "class")]
        class_name: String,
        /// Overwrite an existing spellbook file.
        #[arg(long)]
        force: bool,
    },
    /// Add a spell to an existing spellbook.
    Add {
        #[arg(long)]
        spellbook: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        cast_time: f64,
        /// `use`, `technique`, `utility`, or the legacy codes 1, 2, 3.
        #[arg(long = "type")]
        kind: ActionKind,
        /// Action-bar slot the macro presses.
        #[arg(long)]
        location: u32,
        #[arg(long, default_value_t = 0.0)]
        cooldown: f64,
        /// Mark the spell as off the global cooldown (recorded, not yet used
        /// by the scheduler).
        #[arg(long)]
        no_gcd: bool,
    },
    /// Print the spells of a spellbook with their ranking ids.
    List {
        #[arg(long)]
        spellbook: PathBuf,
    },
    /// Rank spells and write a macro of `count` casts.
    Build {
        #[arg(long)]
        spellbook: PathBuf,
        /// Spell ids in priority order, highest first, e.g. "2 0 1".
        #[arg(long)]
        rank: String,
        #[arg(long)]
        count: u32,
        #[arg(long)]
        out: PathBuf,
        /// Precede each cast with a `# Casting: <name>` comment.
        #[arg(long)]
        verbose: bool,
        /// Global cooldown floor in seconds.
        #[arg(long, default_value_t = GLOBAL_COOLDOWN_FLOOR)]
        gcd: f64,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn new_spellbook(path: &Path, class_name: String, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "spellbook already exists: {} (pass --force to overwrite)",
            path.display()
        );
    }
    save_spellbook(path, &Spellbook::new(class_name))?;
    println!("Spellbook saved to {}", path.display());
    Ok(())
}

fn add_spell(path: &Path, spell: Ability) -> Result<()> {
    spell
        .validate()
        .with_context(|| format!("adding spell '{}'", spell.name))?;
    let mut book = load_spellbook(path)?;
    let name = spell.name.clone();
    book.add_spell(spell);
    save_spellbook(path, &book)?;
    println!(
        "Added '{name}' as spell {} to {}",
        book.spells.len() - 1,
        path.display()
    );
    Ok(())
}

fn list_spells(path: &Path) -> Result<()> {
    let book = load_spellbook(path)?;
    println!("{}", book.class_name);
    print!("{}", format_spell_table(&book));
    Ok(())
}

struct BuildRequest {
    spellbook: PathBuf,
    rank: String,
    count: u32,
    out: PathBuf,
    options: BuildOptions,
}

fn build_macro(request: &BuildRequest) -> Result<()> {
    let book = load_spellbook(&request.spellbook)?;
    let indices = parse_ranking(&request.rank).context("reading ranking")?;
    let ranked = validate_ranking(&indices, book.spells.len()).context("validating ranking")?;
    tracing::debug!(ranked = ?ranked.indices(), "rotation ranked");
    let mut rotation = ranked.resolve(&book.spells)?;

    let run = build_with(&mut rotation, request.count, &request.options)
        .context("building macro")?;
    write_macro(&request.out, &run.log)?;

    println!(
        "Macro created and saved to {}: {} casts over {:.1}s ({} stalls)",
        request.out.display(),
        run.log.cast_count(),
        run.log.total_wait(),
        run.stalls,
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::New {
            spellbook,
            class_name,
            force,
        } => new_spellbook(&spellbook, class_name, force),
        Commands::Add {
            spellbook,
            name,
            cast_time,
            kind,
            location,
            cooldown,
            no_gcd,
        } => {
            let spell = Ability::new(name, cast_time, kind, location)
                .with_cooldown(cooldown)
                .with_gcd(!no_gcd);
            add_spell(&spellbook, spell)
        }
        Commands::List { spellbook } => list_spells(&spellbook),
        Commands::Build {
            spellbook,
            rank,
            count,
            out,
            verbose,
            gcd,
        } => build_macro(&BuildRequest {
            spellbook,
            rank,
            count,
            out,
            options: BuildOptions {
                global_cooldown_floor: gcd,
                verbose,
            },
        }),
    }
}

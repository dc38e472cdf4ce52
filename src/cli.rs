use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML settings file; missing is fine
    #[arg(short, long, global = true, default_value = "dungen.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new dungeon floor
    Generate(GenerateArgs),
    /// Add monsters and props to an existing map file
    Populate(PopulateArgs),
    /// Print the minimap of a map file
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// RNG seed; defaults to the system clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid depth in cells
    #[arg(long)]
    pub depth: Option<i32>,

    /// Number of rooms to try to place
    #[arg(long)]
    pub rooms: Option<u32>,

    /// Map name stored in the output file
    #[arg(short, long, default_value = "Generated Dungeon")]
    pub name: String,

    /// Write the map file here
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also place monsters and props
    #[arg(short, long)]
    pub populate: bool,

    /// Print the minimap
    #[arg(short, long)]
    pub minimap: bool,
}

#[derive(Args, Debug)]
pub struct PopulateArgs {
    pub input: PathBuf,
    pub output: PathBuf,

    /// RNG seed; defaults to the system clock
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub input: PathBuf,

    /// Mark room floors with their kind's letter
    #[arg(short, long)]
    pub rooms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_flags() {
        let cli = Cli::try_parse_from([
            "dungen", "generate", "--seed", "42", "--width", "64", "-o", "out.json", "-m",
        ])
        .expect("parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.width, Some(64));
        assert_eq!(args.out, Some(PathBuf::from("out.json")));
        assert!(args.minimap);
        assert!(!args.populate);
        assert_eq!(cli.config, PathBuf::from("dungen.toml"));
    }

    #[test]
    fn populate_positionals() {
        let cli = Cli::try_parse_from(["dungen", "-c", "x.toml", "populate", "in.json", "out.json"])
            .expect("parse");
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Command::Populate(PopulateArgs { seed: None, .. })));
    }
}

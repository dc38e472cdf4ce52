mod cli;
mod settings;

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use dungen_gen::{generate, render_minimap, render_rooms};
use dungen_map::{MapFile, populate};
use dungen_rng::DungeonRng;
use dungen_types::{Tile, TileGrid};

use cli::{Cli, Command, GenerateArgs, PopulateArgs, ShowArgs};
use settings::Settings;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .wrap_err_with(|| format!("loading settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Generate(args) => run_generate(args, settings),
        Command::Populate(args) => run_populate(args, &settings),
        Command::Show(args) => run_show(args),
    }
}

fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        log::info!("using seed {seed}");
        seed
    })
}

fn run_generate(args: GenerateArgs, settings: Settings) -> Result<()> {
    let mut config = settings.generator;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }
    let seed = seed_or_clock(args.seed);

    let layout = generate(&config, seed).wrap_err("generating layout")?;
    let mut map = MapFile::from_layout(&layout, args.name).wrap_err("packing tile data")?;
    if args.populate {
        let mut rng = DungeonRng::new(seed);
        populate(&mut map, &settings.populate, &mut rng).wrap_err("populating map")?;
    }

    if args.minimap || args.out.is_none() {
        print!("{}", render_minimap(&layout));
    }
    if let Some(out) = args.out {
        map.save(&out)
            .wrap_err_with(|| format!("writing {}", out.display()))?;
        log::info!("wrote {}", out.display());
    }
    Ok(())
}

fn run_populate(args: PopulateArgs, settings: &Settings) -> Result<()> {
    let mut map = MapFile::load(&args.input)
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let mut rng = DungeonRng::new(seed_or_clock(args.seed));
    let report = populate(&mut map, &settings.populate, &mut rng).wrap_err("populating map")?;
    map.save(&args.output)
        .wrap_err_with(|| format!("writing {}", args.output.display()))?;
    println!(
        "{}: {} monsters, {} props, {} groups; {} enemies and {} props total",
        map.name,
        report.monsters,
        report.props,
        report.groups,
        map.enemies.len(),
        map.placed_props.len()
    );
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let map = MapFile::load(&args.input)
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let layout = map.layout().wrap_err("decoding tile data")?;
    if args.rooms {
        print!("{}", render_rooms(&layout));
    } else {
        print!("{}", render_minimap(&layout));
    }
    print_stats(&map, &layout.grid);
    Ok(())
}

fn print_stats(map: &MapFile, grid: &TileGrid) {
    println!(
        "{} ({}x{}): {} rooms, {} floor, {} doors, {} walls, {} enemies, {} props",
        map.name,
        map.width,
        map.depth,
        map.rooms.len(),
        grid.count(Tile::Floor),
        grid.count(Tile::Door),
        grid.count(Tile::Wall),
        map.enemies.len(),
        map.placed_props.len()
    );
}

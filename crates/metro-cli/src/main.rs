use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use metro_core::{EditError, MetroFields, Network};

#[derive(Parser, Debug)]
#[command(
    name = "metro-cli",
    about = "Edit a metro network JSON document in place",
    version
)]
struct Cli {
    /// File to be changed
    #[arg(long)]
    file: PathBuf,
    /// Type of change: modify, add or remove
    #[arg(long = "type", value_enum)]
    kind: Option<OpKind>,
    /// City to be changed or removed
    #[arg(long)]
    city: Option<String>,
    /// Element of the city to be changed
    #[arg(long)]
    element: Option<String>,
    /// New value for the chosen element
    #[arg(long, allow_negative_numbers = true)]
    value: Option<String>,
    /// Code for a new city
    #[arg(long)]
    code: Option<String>,
    /// Continent for a new city
    #[arg(long)]
    continent: Option<String>,
    /// Coordinates for a new city, e.g. lat:40:lon:74
    #[arg(long)]
    coordinates: Option<String>,
    /// Country for a new city
    #[arg(long)]
    country: Option<String>,
    /// Name for a new city
    #[arg(long)]
    name: Option<String>,
    /// Population for a new city
    #[arg(long, allow_negative_numbers = true)]
    population: Option<String>,
    /// Region for a new city
    #[arg(long, allow_negative_numbers = true)]
    region: Option<String>,
    /// Timezone for a new city
    #[arg(long, allow_negative_numbers = true)]
    timezone: Option<String>,
    /// Distance for a route to add
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<String>,
    /// Route to be added or removed, e.g. JFK-LAX
    #[arg(long)]
    route: Option<String>,
    /// Keep a timestamped copy of the file before rewriting it
    #[arg(long, default_value_t = false)]
    backup: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OpKind {
    Modify,
    Add,
    Remove,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), EditError> {
    let mut net = metro_core::load(&cli.file)?;
    match cli.kind {
        Some(OpKind::Modify) => apply_modify(cli, &mut net)?,
        Some(OpKind::Add) => apply_add(cli, &mut net)?,
        Some(OpKind::Remove) => apply_remove(cli, &mut net)?,
        // No operation requested: the file is still rewritten canonically.
        None => {}
    }
    if cli.backup {
        metro_core::backup_file(&cli.file)?;
    }
    metro_core::store(&cli.file, &net)
}

fn apply_modify(cli: &Cli, net: &mut Network) -> Result<(), EditError> {
    let Some(city) = &cli.city else {
        return Ok(());
    };
    match (&cli.element, &cli.value) {
        (Some(element), Some(value)) => metro_core::modify_metro(net, city, element, value),
        _ => Err(EditError::MissingArgument("--element and --value")),
    }
}

// Route and city additions are independent; either or both may fire
// depending on which flags were given.
fn apply_add(cli: &Cli, net: &mut Network) -> Result<(), EditError> {
    if let (Some(distance), Some(route)) = (&cli.distance, &cli.route) {
        metro_core::add_route(net, distance, route)?;
    }
    if let (
        Some(code),
        Some(continent),
        Some(coordinates),
        Some(country),
        Some(name),
        Some(population),
        Some(region),
        Some(timezone),
    ) = (
        &cli.code,
        &cli.continent,
        &cli.coordinates,
        &cli.country,
        &cli.name,
        &cli.population,
        &cli.region,
        &cli.timezone,
    ) {
        let fields = MetroFields {
            code,
            continent,
            coordinates,
            country,
            name,
            population,
            region,
            timezone,
        };
        if let Err(e) = metro_core::add_metro(net, &fields) {
            // Best-effort diagnostic dump in the working directory.
            let _ = fs::write("result", e.to_string());
            return Err(e);
        }
    }
    Ok(())
}

fn apply_remove(cli: &Cli, net: &mut Network) -> Result<(), EditError> {
    if let Some(city) = &cli.city {
        metro_core::remove_metro(net, city)?;
    }
    if let Some(route) = &cli.route {
        metro_core::remove_route(net, route)?;
    }
    Ok(())
}

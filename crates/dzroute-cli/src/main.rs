use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dzroute_lib::{
    ensure_city_network, load_network, plan_route, PlaceCatalog, RoadNetwork, RouteAlgorithm,
    RouteOutputKind, RouteRenderMode, RouteRequest, RouteSummary,
};

mod cities;

use cities::CITIES;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest driving routes across Algerian city road networks"
)]
struct Cli {
    /// Override the cached network database path.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the Algerian cities known to the tool.
    Cities,
    /// Ensure a city's road network is downloaded and report its location.
    Download {
        /// City whose road network should be cached.
        #[arg(long)]
        city: String,
    },
    /// List the place names available in a city's road network.
    Places {
        /// City whose places should be listed.
        #[arg(long)]
        city: String,
        /// Only show names containing this substring.
        #[arg(long)]
        contains: Option<String>,
    },
    /// Compute the shortest driving route between two places in a city.
    Route {
        /// City whose road network is searched.
        #[arg(long)]
        city: String,
        /// Starting place name.
        #[arg(long = "from")]
        from: String,
        /// Destination place name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm to use.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
        algorithm: AlgorithmArg,
        /// Emit the route summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    AStar,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Cities => handle_cities(),
        Command::Download { city } => handle_download(cli.data_dir.as_deref(), &city),
        Command::Places { city, contains } => {
            handle_places(cli.data_dir.as_deref(), &city, contains.as_deref())
        }
        Command::Route {
            city,
            from,
            to,
            algorithm,
            json,
        } => handle_route(cli.data_dir.as_deref(), &city, &from, &to, algorithm.into(), json),
    }
}

fn handle_cities() -> Result<()> {
    for city in CITIES {
        println!("{city}");
    }
    Ok(())
}

fn handle_download(target: Option<&Path>, city: &str) -> Result<()> {
    let path = ensure_city_network(city, target)
        .with_context(|| format!("failed to locate or download the road network for {city}"))?;
    println!("Road network available at {}", path.display());
    Ok(())
}

fn handle_places(target: Option<&Path>, city: &str, contains: Option<&str>) -> Result<()> {
    let network = load_city(target, city)?;
    let catalog = PlaceCatalog::build(&network);

    let filter = contains.map(str::to_lowercase);
    for name in catalog.names() {
        if let Some(filter) = &filter {
            if !name.to_lowercase().contains(filter) {
                continue;
            }
        }
        println!("{name}");
    }
    Ok(())
}

fn handle_route(
    target: Option<&Path>,
    city: &str,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
    json: bool,
) -> Result<()> {
    let network = load_city(target, city)?;
    let catalog = PlaceCatalog::build(&network);

    let request = RouteRequest {
        start: from.to_string(),
        goal: to.to_string(),
        algorithm,
    };
    let plan = plan_route(&network, &catalog, &request)?;
    let summary = RouteSummary::from_plan(RouteOutputKind::Route, &catalog, &plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render(RouteRenderMode::PlainText));
    }
    Ok(())
}

fn load_city(target: Option<&Path>, city: &str) -> Result<RoadNetwork> {
    let path = ensure_city_network(city, target)
        .with_context(|| format!("failed to locate or download the road network for {city}"))?;
    load_network(&path)
        .with_context(|| format!("failed to load the road network from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

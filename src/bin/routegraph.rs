//! routegraph CLI: query a road network described in a network file.
//!
//! Usage:
//!   routegraph show [--matrix] [--network path]
//!   routegraph route <from> <to> [--json]
//!   routegraph fleet <subcommand>

use clap::{Parser, Subcommand, ValueEnum};
use routegraph::config::default_network_path;
use routegraph::{Network, NetworkSpec, Strategy, TraverseQuery, Vehicle};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "routegraph",
    version,
    about = "Road-network graph engine with shortest-path routing"
)]
struct Cli {
    /// Path to the network file (YAML or JSON)
    #[arg(long, global = true)]
    network: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the network as an adjacency list or matrix
    Show {
        /// Print an adjacency matrix instead of a list
        #[arg(long)]
        matrix: bool,
    },
    /// Shortest route between two locations
    Route {
        from: String,
        to: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether one location can reach another
    Reach { from: String, to: String },
    /// Print the visit order of a traversal
    Traverse {
        /// Starting location (defaults to the first location by label)
        #[arg(long)]
        start: Option<String>,
        /// Walk depth-first instead of breadth-first
        #[arg(long)]
        depth_first: bool,
        /// Stop after this many hops from the start
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Inspect the vehicle fleet
    Fleet {
        #[command(subcommand)]
        action: FleetAction,
    },
}

#[derive(Subcommand)]
enum FleetAction {
    /// List all vehicles
    List {
        /// Sort order
        #[arg(long, value_enum)]
        by: Option<SortKey>,
    },
    /// Vehicle closest to its destination
    Nearest,
    /// Vehicle with the highest battery level
    Charged,
    /// Route a vehicle and print its updated record
    Dispatch {
        id: String,
        location: String,
        destination: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    /// Ascending distance to destination
    Distance,
    /// Descending battery level
    Battery,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_network(path: Option<PathBuf>) -> Result<Network, String> {
    let path = path.unwrap_or_else(default_network_path);
    let spec = NetworkSpec::from_path(&path)
        .map_err(|e| format!("Failed to read network '{}': {}", path.display(), e))?;
    spec.build()
        .map_err(|e| format!("Failed to build network: {}", e))
}

fn cmd_show(network: &Network, matrix: bool) -> i32 {
    if network.graph.is_empty() {
        println!("No locations defined.");
        return 0;
    }
    if matrix {
        print!("{}", network.graph.display_as_matrix());
    } else {
        print!("{}", network.graph.display_as_list());
    }
    0
}

fn cmd_route(network: &Network, from: &str, to: &str, json: bool) -> i32 {
    match network.graph.dijkstra(from, to) {
        Ok(route) if json => match serde_json::to_string_pretty(&route) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Ok(route) => {
            println!("Distance: {}", route.distance);
            println!("Path: {}", route.path.join(" -> "));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_reach(network: &Network, from: &str, to: &str) -> i32 {
    match network.graph.is_path(from, to) {
        Ok(Some(distance)) => {
            println!("A path exists between {} and {}, with a distance of {}.", from, to, distance);
            0
        }
        Ok(None) => {
            println!("No path between {} and {}.", from, to);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_traverse(
    network: &Network,
    start: Option<String>,
    depth_first: bool,
    max_depth: Option<usize>,
) -> i32 {
    let start = match start.or_else(|| {
        network
            .graph
            .vertices()
            .next()
            .map(|v| v.label().to_string())
    }) {
        Some(label) => label,
        None => {
            eprintln!("Error: no locations defined");
            return 1;
        }
    };

    let strategy = if depth_first {
        Strategy::DepthFirst
    } else {
        Strategy::BreadthFirst
    };
    let mut query = TraverseQuery::from(start).strategy(strategy);
    if let Some(depth) = max_depth {
        query = query.depth(depth);
    }

    match query.execute(&network.graph) {
        Ok(result) => {
            for visit in &result.visits {
                println!("{}{}", "  ".repeat(visit.depth), visit.label);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_vehicles(vehicles: &[&Vehicle]) {
    if vehicles.is_empty() {
        println!("No vehicles in the system.");
        return;
    }
    for vehicle in vehicles {
        println!("{}", vehicle.summary());
    }
}

fn cmd_fleet(network: &mut Network, action: FleetAction) -> i32 {
    match action {
        FleetAction::List { by } => {
            let vehicles = match by {
                None => network.fleet.vehicles(),
                Some(SortKey::Battery) => network.fleet.by_battery(),
                Some(SortKey::Distance) => match network.fleet.by_distance() {
                    Ok(vehicles) => vehicles,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return 1;
                    }
                },
            };
            print_vehicles(&vehicles);
            0
        }
        FleetAction::Nearest => match network.fleet.nearest() {
            Ok(Some(vehicle)) => {
                println!("{}", vehicle.summary());
                0
            }
            Ok(None) => {
                println!("No vehicles in the system.");
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        FleetAction::Charged => {
            match network.fleet.highest_battery() {
                Some(vehicle) => println!("{}", vehicle.summary()),
                None => println!("No vehicles in the system."),
            }
            0
        }
        FleetAction::Dispatch {
            id,
            location,
            destination,
        } => {
            let Network { graph, fleet } = network;
            match fleet.dispatch(graph, &id, &location, &destination) {
                Ok(_) => match fleet.get(&id) {
                    Ok(vehicle) => {
                        println!("{}", vehicle.summary());
                        0
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        1
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut network = match open_network(cli.network) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Show { matrix } => cmd_show(&network, matrix),
        Commands::Route { from, to, json } => cmd_route(&network, &from, &to, json),
        Commands::Reach { from, to } => cmd_reach(&network, &from, &to),
        Commands::Traverse {
            start,
            depth_first,
            max_depth,
        } => cmd_traverse(&network, start, depth_first, max_depth),
        Commands::Fleet { action } => cmd_fleet(&mut network, action),
    };
    std::process::exit(code);
}

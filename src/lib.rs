#![deny(clippy::all)]

use anyhow::{anyhow, Context};
use clap::{App, Arg, ArgMatches};
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use searcher::algorithm::{astar, basic, uniform};
use searcher::{SearchError, SearchOptions, SearchProblem, SearchResult, Solution};

pub mod graph;

use graph::{tabulated, RoutingGraph};

type Error = anyhow::Error;
type Runner = fn(&RoutingGraph, SearchOptions) -> SearchResult<Solution<String>>;

fn run_dfs(graph: &RoutingGraph, options: SearchOptions) -> SearchResult<Solution<String>> {
    basic::dfs::build(graph).with_options(options).run()
}

fn run_bfs(graph: &RoutingGraph, options: SearchOptions) -> SearchResult<Solution<String>> {
    basic::bfs::build(graph).with_options(options).run()
}

fn run_ucs(graph: &RoutingGraph, options: SearchOptions) -> SearchResult<Solution<String>> {
    uniform::build(graph).with_options(options).run()
}

fn run_astar(graph: &RoutingGraph, options: SearchOptions) -> SearchResult<Solution<String>> {
    astar::build(graph, tabulated).with_options(options).run()
}

lazy_static! {
    static ref ALGORITHMS: HashMap<&'static str, Runner> = {
        let mut a: HashMap<&'static str, Runner> = HashMap::new();
        let algorithms: Vec<(&'static str, &'static str, Runner)> = vec![
            ("depth_first_search", "dfs", run_dfs as Runner),
            ("breadth_first_search", "bfs", run_bfs as Runner),
            ("uniform_cost_search", "ucs", run_ucs as Runner),
            ("a_star_search", "astar", run_astar as Runner),
        ];

        for (name, alias, runner) in algorithms.into_iter() {
            a.insert(name, runner);
            a.insert(alias, runner);
        }

        a
    };
}

/// Every name an algorithm can be selected by, sorted.
pub fn algorithms() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ALGORITHMS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// The outcome of one successful search over a graph.
#[derive(Debug, Clone)]
pub struct Report {
    pub actions: Vec<String>,
    pub cost: f64,
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Run the named algorithm over `graph`.
pub fn search(
    graph: &RoutingGraph,
    algorithm: &str,
    options: SearchOptions,
) -> Result<Report, Error> {
    let runner = ALGORITHMS
        .get(algorithm)
        .ok_or_else(|| PathSearchError::UnknownAlgorithm(algorithm.to_string()))?;

    let started = Instant::now();
    let solution = runner(graph, options)
        .map_err(|e| PathSearchError::SearchFailed(algorithm.to_string(), e))?;
    let elapsed = started.elapsed();

    let cost = graph
        .cost_of_actions(&solution.actions)
        .ok_or_else(|| anyhow!("{} returned an illegal path", algorithm))?;

    Ok(Report {
        cost,
        elapsed,
        expanded: solution.expanded,
        actions: solution.into_actions(),
    })
}

pub fn solver() -> Result<(), Error> {
    let names = algorithms();
    let matches = App::new("pathsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through weighted graphs")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .takes_value(true)
                .possible_values(&names)
                .default_value("dfs"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after expanding this many nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .value_name("SECONDS")
                .help("Give up after searching for this long")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more (repeat for more detail)"),
        )
        .arg(
            Arg::with_name("graph")
                .value_name("GRAPH")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let options = search_options(&matches)?;
    let reader = get_input_reader(matches.value_of("graph"))?;
    let graph = RoutingGraph::read(reader)?;
    info!("Loaded graph with {} nodes", graph.len());

    let algorithm = matches.value_of("algorithm").unwrap_or("dfs");
    let report = search(&graph, algorithm, options)?;

    for action in &report.actions {
        println!("{}", action);
    }
    println!(
        "Path found with total cost of {} in {:.3} seconds",
        report.cost,
        report.elapsed.as_secs_f64()
    );
    println!("Search nodes expanded: {}", report.expanded);

    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn search_options(matches: &ArgMatches) -> Result<SearchOptions, Error> {
    let step_limit = matches
        .value_of("limit")
        .map(str::parse::<usize>)
        .transpose()
        .context("Invalid step limit")?;

    let time_limit = matches
        .value_of("timeout")
        .map(str::parse::<f64>)
        .transpose()
        .context("Invalid timeout")?
        .map(|seconds| {
            if seconds.is_finite() && seconds >= 0.0 {
                Ok(Duration::from_secs_f64(seconds))
            } else {
                Err(anyhow!("Timeout must be a non-negative number of seconds"))
            }
        })
        .transpose()?;

    Ok(SearchOptions {
        step_limit,
        time_limit,
        ..SearchOptions::default()
    })
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        Some("-") | None => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| PathSearchError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum PathSearchError {
    #[error("No algorithm named {0:?}")]
    UnknownAlgorithm(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("{0} search failed")]
    SearchFailed(String, #[source] SearchError),
}

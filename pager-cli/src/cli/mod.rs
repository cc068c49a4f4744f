pub mod config;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pager::{
    connection::{ConnectionSource, InMemoryConnection},
    query,
    store::MemoryRequestStore,
    PageInfo, PaginationState, Paginator,
};
use serde::Serialize;
use std::path::PathBuf;

use self::config::{Config, EnvOverride};

#[derive(Parser)]
#[clap(long_about = None)]
struct Cli {
    #[clap(short, long, env = "PAGER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    #[clap(long, env = "PAGER_PAGE_SIZE")]
    page_size: Option<u32>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fetch variables for a persisted query string
    Resolve {
        #[clap(short, long, default_value = "")]
        query: String,
    },
    /// Print the navigation affordances for a fetched page
    Navigate {
        #[clap(short, long, default_value = "")]
        query: String,
        /// `pageInfo` block of the fetch response, as JSON
        #[clap(long)]
        page_info: Option<String>,
    },
    /// Page through an in-memory list
    Walk {
        #[clap(long, default_value_t = 45)]
        items: usize,
        #[clap(
            long,
            value_enum,
            value_delimiter = ',',
            default_values_t = vec![Step::Next, Step::Next, Step::Previous]
        )]
        steps: Vec<Step>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Step {
    Next,
    Previous,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigationOutput {
    can_go_next: bool,
    can_go_previous: bool,
    next_query: Option<String>,
    previous_query: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WalkOutput<'a> {
    step: usize,
    state: String,
    variables: &'a pager::PaginationVariables,
    page_info: &'a PageInfo,
    nodes: &'a [String],
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_config(
        cli.config,
        EnvOverride {
            page_size: cli.page_size,
        },
    )?;
    pager_tracing::init_tracer(config.tracing.clone())?;
    let paginator = Paginator::new(config.paginator)?;

    for line in run_cmd(&paginator, cli.command)? {
        println!("{line}");
    }
    Ok(())
}

fn run_cmd(paginator: &Paginator, command: Command) -> anyhow::Result<Vec<String>> {
    match command {
        Command::Resolve { query } => {
            let request = query::request_from_query(&query);
            let variables = paginator.resolve_variables(&request);
            Ok(vec![serde_json::to_string(&variables)?])
        }
        Command::Navigate { query, page_info } => {
            let page_info = page_info
                .map(|json| serde_json::from_str::<PageInfo>(&json))
                .transpose()
                .context("Couldn't parse page info")?;
            let request = query::request_from_query(&query);
            let navigation = paginator.derive_navigation(page_info.as_ref(), &request);
            let output = NavigationOutput {
                can_go_next: navigation.can_go_next,
                can_go_previous: navigation.can_go_previous,
                next_query: navigation
                    .next_request()
                    .map(|next| query::merge_into_query(&query, next)),
                previous_query: navigation
                    .previous_request()
                    .map(|previous| query::merge_into_query(&query, previous)),
            };
            Ok(vec![serde_json::to_string(&output)?])
        }
        Command::Walk { items, steps } => walk(paginator, items, &steps),
    }
}

fn walk(paginator: &Paginator, items: usize, steps: &[Step]) -> anyhow::Result<Vec<String>> {
    let source = InMemoryConnection::new((0..items).map(|i| format!("item-{i}")).collect());
    let mut store = MemoryRequestStore::default();
    let mut lines = Vec::with_capacity(steps.len() + 1);
    let mut step = 0;
    loop {
        let state = PaginationState::from(store.current());
        let variables = paginator.resolve_variables(store.current());
        let page = source.fetch(&variables)?;
        lines.push(serde_json::to_string(&WalkOutput {
            step,
            state: state.to_string(),
            variables: &variables,
            page_info: &page.page_info,
            nodes: &page.nodes,
        })?);

        let Some(next_step) = steps.get(step) else {
            break;
        };
        let navigation = paginator.derive_navigation(Some(&page.page_info), store.current());
        let moved = match next_step {
            Step::Next if navigation.can_go_next => navigation.on_next(&mut store),
            Step::Previous if navigation.can_go_previous => navigation.on_previous(&mut store),
            _ => false,
        };
        if !moved {
            pager_tracing::warn!(?next_step, state = %state, "navigation not available");
        }
        step += 1;
    }
    Ok(lines)
}

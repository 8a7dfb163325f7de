pub mod choose;
pub mod play;

use std::path::PathBuf;

use choose::Choose;
use play::Play;

use clap::Subcommand;
use color_eyre::eyre::{Result, WrapErr};
use pacman_grid::{AgentKind, Layout};
use pacman_minimax::{EvaluatorKind, SearchPlan};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Ask an agent for its move at the start of a layout
    Choose(Choose),
    /// Play a whole game and report how it went
    Play(Play),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Choose(c) => c.run()?,
            Command::Play(p) => p.run()?,
        }

        Ok(())
    }
}

/// The options every command shares
#[derive(clap::Args, Debug)]
pub(crate) struct Setup {
    /// Path to a layout file
    #[clap(short, long, value_parser)]
    layout: PathBuf,

    /// Only keep this many ghosts from the layout
    #[clap(short, long, value_parser)]
    ghosts: Option<usize>,

    /// reflex, minimax, alpha-beta or expectimax
    #[clap(short, long, value_parser, default_value = "alpha-beta")]
    agent: AgentKind,

    /// Evaluation function for the search agents, score or better
    #[clap(short, long, value_parser, default_value = "score")]
    evaluator: String,

    /// How many full rounds the search agents look ahead
    #[clap(short, long, value_parser, default_value = "2")]
    depth: String,
}

impl Setup {
    pub(crate) fn layout(&self) -> Result<Layout> {
        let text = std::fs::read_to_string(&self.layout)
            .wrap_err_with(|| format!("Could not read {}", self.layout.display()))?;
        let layout: Layout = text
            .parse()
            .wrap_err_with(|| format!("{} is not a valid layout", self.layout.display()))?;

        Ok(match self.ghosts {
            Some(count) => layout.limit_ghosts(count),
            None => layout,
        })
    }

    pub(crate) fn plan(&self) -> Result<SearchPlan<EvaluatorKind>> {
        SearchPlan::from_names(&self.evaluator, &self.depth).wrap_err("Invalid search plan")
    }
}

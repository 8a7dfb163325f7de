use clap::ValueEnum;
use color_eyre::eyre::Result;
use itertools::Itertools;
use pacman_grid::{AgentKind, Direction, GridWorld, PacmanAgent};
use pacman_minimax::SearchAgent;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use super::Setup;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub(crate) struct Choose {
    #[clap(flatten)]
    setup: Setup,

    /// Seed for the tie breaks of the reflex agent
    #[clap(short, long, value_parser, default_value_t = 0)]
    seed: u64,

    /// How to print the decision
    #[clap(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Serialize, Debug)]
struct ScoredAction {
    action: Direction,
    value: f64,
}

#[derive(Serialize, Debug)]
struct Decision {
    agent: String,
    action: Direction,
    score: Option<f64>,
    options: Vec<ScoredAction>,
}

impl Choose {
    pub(crate) fn run(self) -> Result<()> {
        let world = GridWorld::from_layout(&self.setup.layout()?);
        let plan = self.setup.plan()?;

        let (decision, tree) = match self.setup.agent {
            AgentKind::Search(mode) => {
                let agent = SearchAgent::new(plan, mode, "arena");
                let result = agent.search(&world)?;

                let decision = Decision {
                    agent: self.setup.agent.to_string(),
                    action: result.best_action(),
                    score: Some(result.score()),
                    options: result
                        .options()
                        .iter()
                        .map(|&(action, value)| ScoredAction { action, value })
                        .collect_vec(),
                };
                (decision, Some(result.to_text_tree()))
            }
            AgentKind::Reflex => {
                let agent = AgentKind::Reflex.build(plan);
                let mut rng = StdRng::seed_from_u64(self.seed);

                let decision = Decision {
                    agent: agent.name().to_owned(),
                    action: agent.next_action(&world, &mut rng)?,
                    score: None,
                    options: vec![],
                };
                (decision, None)
            }
        };

        match self.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
            Format::Text => {
                println!("{world}");
                println!("{} plays {}", decision.agent, decision.action);
                if let Some(tree) = tree {
                    println!("{tree}");
                }
            }
        }

        Ok(())
    }
}

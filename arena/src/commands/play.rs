use color_eyre::eyre::Result;
use pacman_grid::{play_game, GhostKind, GridWorld};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use super::Setup;

#[derive(clap::Args, Debug)]
pub(crate) struct Play {
    #[clap(flatten)]
    setup: Setup,

    /// How the ghosts move, random or directional
    #[clap(long, value_parser, default_value = "random")]
    ghost_policy: GhostKind,

    /// Seed for the ghosts and the tie breaks of the reflex agent
    #[clap(short, long, value_parser, default_value_t = 0)]
    seed: u64,

    /// Give up after Pacman made this many moves
    #[clap(short, long, value_parser, default_value_t = 500)]
    max_moves: usize,

    /// Print the record of the game as JSON instead of the final board
    #[clap(long)]
    json: bool,
}

impl Play {
    pub(crate) fn run(self) -> Result<()> {
        let world = GridWorld::from_layout(&self.setup.layout()?);
        let agent = self.setup.agent.build(self.setup.plan()?);
        let ghosts = self.ghost_policy.policy();
        let mut rng = StdRng::seed_from_u64(self.seed);

        info!(
            agent = %self.setup.agent,
            ghosts = ?self.ghost_policy,
            seed = self.seed,
            "starting game"
        );
        let record = play_game(
            world,
            agent.as_ref(),
            ghosts.as_ref(),
            &mut rng,
            self.max_moves,
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            print!("{}", record.final_board);
            match record.outcome {
                Some(outcome) => println!(
                    "{outcome:?} with a score of {} after {} moves",
                    record.score,
                    record.pacman_moves.len()
                ),
                None => println!(
                    "No winner after {} moves, the score is {}",
                    record.pacman_moves.len(),
                    record.score
                ),
            }
        }

        Ok(())
    }
}

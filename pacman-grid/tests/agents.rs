use pacman_grid::{play_game, AgentKind, Direction, GhostKind, GridWorld, Layout, PacmanAgent};
use pacman_minimax::{types::SearchableGame, EvaluatorKind, SearchMode, SearchPlan};
use rand::{rngs::StdRng, SeedableRng};

const MAX_MOVES: usize = 40;

fn layouts() -> Vec<(&'static str, Layout)> {
    [
        ("test_classic", include_str!("../layouts/test_classic.lay")),
        ("small_classic", include_str!("../layouts/small_classic.lay")),
        ("trapped_classic", include_str!("../layouts/trapped_classic.lay")),
        ("capsule_corner", include_str!("../layouts/capsule_corner.lay")),
    ]
    .into_iter()
    .map(|(name, text)| (name, text.parse().unwrap()))
    .collect()
}

#[test]
fn every_agent_plays_every_layout() {
    for (name, layout) in layouts() {
        for kind in AgentKind::ALL {
            for ghosts in [GhostKind::Random, GhostKind::Directional] {
                let agent = kind.build(SearchPlan::from_names("better", "1").unwrap());
                let mut rng = StdRng::seed_from_u64(42);

                let record = play_game(
                    GridWorld::from_layout(&layout),
                    agent.as_ref(),
                    ghosts.policy().as_ref(),
                    &mut rng,
                    MAX_MOVES,
                )
                .unwrap();

                assert!(record.score.is_finite(), "{name} {kind}");
                assert!(record.pacman_moves.len() <= MAX_MOVES, "{name} {kind}");
                if record.outcome.is_none() {
                    assert_eq!(record.pacman_moves.len(), MAX_MOVES, "{name} {kind}");
                }
            }
        }
    }
}

#[test]
fn alpha_beta_plays_the_same_game_as_minimax() {
    for (name, layout) in layouts() {
        let records = [SearchMode::Minimax, SearchMode::AlphaBeta].map(|mode| {
            let plan = SearchPlan::new(EvaluatorKind::Better, 2).unwrap();
            let agent = AgentKind::Search(mode).build(plan);
            let mut rng = StdRng::seed_from_u64(7);

            play_game(
                GridWorld::from_layout(&layout),
                agent.as_ref(),
                GhostKind::Directional.policy().as_ref(),
                &mut rng,
                MAX_MOVES,
            )
            .unwrap()
        });

        assert_eq!(records[0], records[1], "{name}");
    }
}

#[test]
fn games_are_reproducible_from_the_seed() {
    let layout: Layout = include_str!("../layouts/small_classic.lay").parse().unwrap();

    let play = || {
        let agent = AgentKind::Reflex.build(SearchPlan::default());
        let mut rng = StdRng::seed_from_u64(1);

        play_game(
            GridWorld::from_layout(&layout),
            agent.as_ref(),
            GhostKind::Random.policy().as_ref(),
            &mut rng,
            MAX_MOVES,
        )
        .unwrap()
    };

    assert_eq!(play(), play());
}

#[test]
fn searching_agents_head_for_the_closest_food() {
    let layout: Layout = include_str!("../layouts/test_classic.lay").parse().unwrap();
    let world = GridWorld::from_layout(&layout);

    for mode in SearchMode::ALL {
        let agent = AgentKind::Search(mode).build(SearchPlan::default());
        let mut rng = StdRng::seed_from_u64(0);

        let action = agent.next_action(&world, &mut rng).unwrap();

        assert_eq!(action, Direction::East, "{mode}");
        assert_eq!(world.successor(0, action).unwrap().score(), -1.0);
    }
}

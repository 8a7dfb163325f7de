//! Small hand built games for the unit tests

use std::{fmt::Display, rc::Rc};

use rand::{rngs::StdRng, Rng};

use crate::{
    types::{
        AgentIndex, FoodGettableGame, GameAction, GhostGettableGame, GhostState,
        PacmanPositionGettableGame, Position, SearchableGame, SizeDeterminableGame,
    },
    InvalidAction,
};

/// Take the child at this index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Branch(pub usize);

impl Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "branch {}", self.0)
    }
}

impl GameAction for Branch {
    const STOP: Self = Branch(usize::MAX);
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TreeNode {
    pub score: f64,
    pub terminal: bool,
    pub children: Vec<Rc<TreeNode>>,
}

pub(crate) fn leaf(score: f64) -> TreeNode {
    TreeNode {
        score,
        terminal: false,
        children: vec![],
    }
}

pub(crate) fn node(children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        score: 0.0,
        terminal: false,
        children: children.into_iter().map(Rc::new).collect(),
    }
}

/// A won game that still lists moves, so tests can check nothing past it gets explored
pub(crate) fn terminal(score: f64, children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        score,
        terminal: true,
        ..node(children)
    }
}

/// A random tree with exactly `plies` levels of moves. Every inner node has between 1 and
/// `max_branching` children and every node gets a small integer score.
pub(crate) fn random_tree(rng: &mut StdRng, plies: usize, max_branching: usize) -> TreeNode {
    let score = rng.gen_range(-20..=20) as f64;
    if plies == 0 {
        return leaf(score);
    }

    let width = rng.gen_range(1..=max_branching);
    let children = (0..width)
        .map(|_| random_tree(rng, plies - 1, max_branching))
        .collect();

    TreeNode {
        score,
        ..node(children)
    }
}

/// A game whose whole move tree is written out ahead of time. Agents alternate in index order
#[derive(Debug, Clone)]
pub(crate) struct TreeWorld {
    node: Rc<TreeNode>,
    to_move: AgentIndex,
    num_agents: usize,
}

impl TreeWorld {
    pub(crate) fn new(root: TreeNode, num_agents: usize) -> Self {
        Self {
            node: Rc::new(root),
            to_move: 0,
            num_agents,
        }
    }
}

impl SearchableGame for TreeWorld {
    type Action = Branch;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Branch> {
        if agent != self.to_move {
            return vec![];
        }

        (0..self.node.children.len()).map(Branch).collect()
    }

    fn successor(&self, agent: AgentIndex, action: Branch) -> Result<Self, InvalidAction> {
        let child = self
            .node
            .children
            .get(action.0)
            .filter(|_| agent == self.to_move)
            .ok_or_else(|| InvalidAction::new(agent, action))?;

        Ok(Self {
            node: child.clone(),
            to_move: (agent + 1) % self.num_agents,
            num_agents: self.num_agents,
        })
    }

    fn is_win(&self) -> bool {
        self.node.terminal
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn score(&self) -> f64 {
        self.node.score
    }
}

/// A frozen board for the evaluators. It has no moves of its own
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoardSnapshot {
    pub score: f64,
    pub pacman: Position,
    pub food: Vec<Position>,
    pub capsules: Vec<Position>,
    pub ghosts: Vec<GhostState>,
    pub width: u32,
    pub height: u32,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            score: 0.0,
            pacman: Position::new(1, 1),
            food: vec![],
            capsules: vec![],
            ghosts: vec![],
            width: 7,
            height: 7,
        }
    }
}

impl SearchableGame for BoardSnapshot {
    type Action = Branch;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Branch> {
        vec![]
    }

    fn successor(&self, agent: AgentIndex, action: Branch) -> Result<Self, InvalidAction> {
        Err(InvalidAction::new(agent, action))
    }

    fn is_win(&self) -> bool {
        self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanPositionGettableGame for BoardSnapshot {
    fn pacman_position(&self) -> Position {
        self.pacman
    }
}

impl FoodGettableGame for BoardSnapshot {
    fn food_positions(&self) -> Vec<Position> {
        self.food.clone()
    }

    fn capsule_positions(&self) -> Vec<Position> {
        self.capsules.clone()
    }
}

impl GhostGettableGame for BoardSnapshot {
    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts.clone()
    }
}

impl SizeDeterminableGame for BoardSnapshot {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

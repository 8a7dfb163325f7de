use std::ops::ControlFlow;

use crate::{types::AgentIndex, Score, SearchMode};

/// The alpha-beta window handed down to a child. Copied into every call, so siblings never see
/// each other's tightening
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    /// The best score Pacman can already force
    pub alpha: Score,
    /// The best score the ghosts can already force
    pub beta: Score,
}

impl Bounds {
    pub(crate) fn unbounded() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

/// How the values of a node's children combine into the node's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Aggregation {
    Max { prune: bool },
    Min { prune: bool },
    Mean,
}

impl SearchMode {
    pub(crate) fn aggregation_for(self, agent: AgentIndex) -> Aggregation {
        match (self, agent) {
            (SearchMode::Minimax | SearchMode::Expectimax, 0) => Aggregation::Max { prune: false },
            (SearchMode::AlphaBeta, 0) => Aggregation::Max { prune: true },
            (SearchMode::Minimax, _) => Aggregation::Min { prune: false },
            (SearchMode::AlphaBeta, _) => Aggregation::Min { prune: true },
            (SearchMode::Expectimax, _) => Aggregation::Mean,
        }
    }
}

/// Who moves after `agent`, and in which round. The round only advances once every agent has
/// moved
pub(crate) fn next_turn(round: usize, agent: AgentIndex, num_agents: usize) -> (usize, AgentIndex) {
    if agent + 1 >= num_agents {
        (round + 1, 0)
    } else {
        (round, agent + 1)
    }
}

/// Folds child values into a node value, one child at a time
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    aggregation: Aggregation,
    value: Score,
    count: usize,
    bounds: Bounds,
}

impl Accumulator {
    pub(crate) fn new(aggregation: Aggregation, bounds: Bounds) -> Self {
        let value = match aggregation {
            Aggregation::Max { .. } => f64::NEG_INFINITY,
            Aggregation::Min { .. } => f64::INFINITY,
            Aggregation::Mean => 0.0,
        };

        Self {
            aggregation,
            value,
            count: 0,
            bounds,
        }
    }

    /// The window the next child should be searched with
    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Add a child's value. Breaks with the node's value when the remaining children can not
    /// matter to the parent
    pub(crate) fn push(&mut self, child: Score) -> ControlFlow<Score> {
        self.count += 1;

        match self.aggregation {
            Aggregation::Max { prune } => {
                self.value = self.value.max(child);
                if prune {
                    if self.value > self.bounds.beta {
                        return ControlFlow::Break(self.value);
                    }
                    self.bounds.alpha = self.bounds.alpha.max(self.value);
                }
            }
            Aggregation::Min { prune } => {
                self.value = self.value.min(child);
                if prune {
                    if self.value < self.bounds.alpha {
                        return ControlFlow::Break(self.value);
                    }
                    self.bounds.beta = self.bounds.beta.min(self.value);
                }
            }
            Aggregation::Mean => self.value += child,
        }

        ControlFlow::Continue(())
    }

    /// The node's value once every child has been pushed
    pub(crate) fn finish(self) -> Score {
        match self.aggregation {
            Aggregation::Mean => self.value / self.count as f64,
            _ => self.value,
        }
    }
}

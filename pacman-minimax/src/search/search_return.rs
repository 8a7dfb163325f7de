use text_trees::StringTreeNode;

use crate::{types::GameAction, Score, SearchMode};

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a search. It records the value found for every action Pacman had at the
/// root, and which one was chosen.
///
/// With [SearchMode::AlphaBeta] only the chosen action's value is guaranteed to be exact. An
/// action that lost may carry an upper bound on its true value instead, since its subtree was
/// only explored far enough to show it could not win.
pub struct SearchReturn<Action> {
    mode: SearchMode,
    depth: usize,
    options: Vec<(Action, Score)>,
    best_action: Action,
    score: Score,
}

impl<Action: GameAction> SearchReturn<Action> {
    /// Pick the first action with the strictly highest value. When there are no options at all
    /// the result is [GameAction::STOP]
    pub(crate) fn from_options(
        mode: SearchMode,
        depth: usize,
        options: Vec<(Action, Score)>,
    ) -> Self {
        let mut best_action = Action::STOP;
        let mut score = f64::NEG_INFINITY;
        for (action, value) in &options {
            if *value > score {
                best_action = *action;
                score = *value;
            }
        }

        Self {
            mode,
            depth,
            options,
            best_action,
            score,
        }
    }

    /// The action Pacman should take
    pub fn best_action(&self) -> Action {
        self.best_action
    }

    /// The value of [SearchReturn::best_action]. Negative infinity when Pacman had no move
    pub fn score(&self) -> Score {
        self.score
    }

    /// Every root action with the value the search computed for it, in the order the game listed
    /// them
    pub fn options(&self) -> &[(Action, Score)] {
        &self.options
    }

    /// The mode the search ran with
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The depth, in full rounds, the search ran with
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// This returns a visual representation of the root decision. The chosen action is marked
    /// with a `*`
    pub fn to_text_tree(&self) -> String {
        let mut root = StringTreeNode::new(format!(
            "{} depth {} => {} {}",
            self.mode, self.depth, self.best_action, self.score
        ));

        let mut marked = false;
        for (action, value) in &self.options {
            let marker = if !marked && *action == self.best_action && *value == self.score {
                marked = true;
                "*"
            } else {
                " "
            };
            root.push_node(StringTreeNode::new(format!("{marker} {action} {value}")));
        }

        format!("{}", root)
    }
}

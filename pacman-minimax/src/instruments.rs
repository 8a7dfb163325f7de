use std::cell::Cell;

/// Hooks the search calls as it walks the tree. They observe, they never steer.
///
/// `round` is the number of full rounds already played below the root when the node was reached.
pub trait SearchInstruments {
    /// A node was scored by the evaluation function instead of being expanded
    fn observe_leaf(&self, round: usize);

    /// A node was expanded for `agent`
    fn observe_expansion(&self, round: usize, agent: usize);
}

#[derive(Debug, Clone, Copy, Default)]
/// An empty struct that implements `SearchInstruments` as a no-op, for when you don't want to
/// observe the search
pub struct Instruments {}

impl SearchInstruments for Instruments {
    fn observe_leaf(&self, _round: usize) {}

    fn observe_expansion(&self, _round: usize, _agent: usize) {}
}

/// Counts what the search did. Useful for benchmarks and for checking how deep a search went
#[derive(Debug, Default)]
pub struct CountingInstruments {
    leaves: Cell<u64>,
    expansions: Cell<u64>,
    deepest_round: Cell<usize>,
}

impl CountingInstruments {
    /// Start counting from zero
    pub fn new() -> Self {
        Self::default()
    }

    /// How many nodes were scored by the evaluation function
    pub fn leaves(&self) -> u64 {
        self.leaves.get()
    }

    /// How many nodes had their children generated
    pub fn expansions(&self) -> u64 {
        self.expansions.get()
    }

    /// The deepest round any leaf was scored at
    pub fn deepest_round(&self) -> usize {
        self.deepest_round.get()
    }
}

impl SearchInstruments for CountingInstruments {
    fn observe_leaf(&self, round: usize) {
        self.leaves.set(self.leaves.get() + 1);
        self.deepest_round.set(self.deepest_round.get().max(round));
    }

    fn observe_expansion(&self, _round: usize, _agent: usize) {
        self.expansions.set(self.expansions.get() + 1);
    }
}

impl<T: SearchInstruments + ?Sized> SearchInstruments for &T {
    fn observe_leaf(&self, round: usize) {
        (**self).observe_leaf(round)
    }

    fn observe_expansion(&self, round: usize, agent: usize) {
        (**self).observe_expansion(round, agent)
    }
}

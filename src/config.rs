/// How a `+` quantifier explores repetition counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlusStrategy {
    /// Consume the whole run first, then release one character at a time.
    #[default]
    Greedy,
    /// Consume one character, try the rest, consume another, and so on.
    ///
    /// Much cheaper on inputs like `a+a+a+...` against a long run of `a`
    /// that do match, since the first attempt already succeeds.
    Lazy,
}

/// Search options for a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    plus: PlusStrategy,
    step_budget: Option<u64>,
}

impl Config {
    /// Greedy plus, no step budget.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plus_strategy(mut self, plus: PlusStrategy) -> Self {
        self.plus = plus;
        self
    }

    /// Bound the number of stepper entries a single search may make.
    ///
    /// Counted across every start offset the driver tries. `None` removes
    /// the bound.
    pub fn with_step_budget(mut self, budget: Option<u64>) -> Self {
        self.step_budget = budget;
        self
    }

    pub fn plus_strategy(&self) -> PlusStrategy {
        self.plus
    }

    pub fn step_budget(&self) -> Option<u64> {
        self.step_budget
    }
}

/// Maximum points allocated to each rubric category
///
/// The five category maxima must always sum to 100. If the allocation ever
/// changes, the invariant test below has to be updated alongside it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    /// Content & structure: salutation, key info, flow, unique point
    pub content: f64,
    /// Speech rate bucket
    pub speech_rate: f64,
    /// Language & grammar: grammar + vocabulary
    pub language: f64,
    /// Clarity of expression
    pub clarity: f64,
    /// Listener engagement
    pub engagement: f64,
}

impl CategoryWeights {
    pub fn total(&self) -> f64 {
        self.content + self.speech_rate + self.language + self.clarity + self.engagement
    }
}

/// Process-wide rubric allocation
pub const RUBRIC: CategoryWeights = CategoryWeights {
    content: 40.0,
    speech_rate: 10.0,
    language: 20.0,
    clarity: 15.0,
    engagement: 15.0,
};

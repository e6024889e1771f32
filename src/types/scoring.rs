pub type Score = f64;

/// Talk, Walk and Risk at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub talk: Score,
    pub walk: Score,
    pub risk: Score,
}

impl ScoreCard {
    pub fn new(talk: Score, walk: Score, risk: Score) -> Self {
        Self {
            talk: clamp_score(talk),
            walk: clamp_score(walk),
            risk: clamp_score(risk),
        }
    }

    /// One decimal place, as shown in reports.
    pub fn rounded(&self) -> Self {
        Self {
            talk: round_one_decimal(self.talk),
            walk: round_one_decimal(self.walk),
            risk: round_one_decimal(self.risk),
        }
    }
}

pub fn clamp_score(score: Score) -> Score {
    score.clamp(0.0, 100.0)
}

/// Rounds the exact binary value to one decimal, ties to even.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse::<f64>().unwrap_or(value)
}

// Scoring: derived analytics computed from raw profile counters.

pub mod engagement;

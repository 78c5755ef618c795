pub mod rsi;
pub mod stochastic;

pub use rsi::{calculate_rsi, calculate_rsi_default};
pub use stochastic::{calculate_stochastic, StochasticSeries};

/// Map events to localized month labels and calendar order.
pub mod localize;
/// Per-ticker historical mean of dividend amounts.
pub mod mean;
/// Turn raw provider payments into exchange-local dividend events.
pub mod normalize;
/// Division helpers that treat a zero or missing divisor as "unavailable".
pub mod percent;
/// Buy/sell date arithmetic and trade gain.
pub mod window;

pub mod calendar;
pub mod dividends;
pub mod macros;
pub mod prices;
pub mod profile;

pub mod util;

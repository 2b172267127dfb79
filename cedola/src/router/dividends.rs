use cedola_core::{Capability, DividendHistory, Instrument};

use crate::Cedola;
use crate::router::macros::cedola_router_method;

impl Cedola {
    cedola_router_method! {
        /// Fetch the full dividend payment history for an instrument.
        ///
        /// An instrument that never paid a dividend yields an empty history.
        method: dividend_history(inst: &Instrument) -> DividendHistory,
        accessor: as_dividend_provider,
        capability: Capability::DividendHistory,
        call: dividends(inst)
    }
}

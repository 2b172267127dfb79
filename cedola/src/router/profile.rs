use cedola_core::{Capability, CedolaError, Instrument, Profile};

use crate::Cedola;
use crate::router::macros::cedola_router_method;

impl Cedola {
    cedola_router_method! {
        /// Fetch a company or fund profile.
        method: profile(inst: &Instrument) -> Profile,
        accessor: as_profile_provider,
        capability: Capability::Profile,
        call: profile(inst)
    }

    /// Display name of an instrument as reported by its profile.
    ///
    /// # Errors
    /// Propagates profile lookup failures; callers fall back to the ticker.
    pub async fn display_name(&self, inst: &Instrument) -> Result<String, CedolaError> {
        let name = match self.profile(inst).await? {
            Profile::Company(c) => c.name,
            Profile::Fund(f) => f.name,
        };
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CedolaError::Data(format!(
                "empty profile name for {}",
                inst.symbol()
            )));
        }
        Ok(trimmed.to_string())
    }
}

use cedola_core::{CompanyProfile, Profile};

use super::listing;

pub fn by_symbol(s: &str) -> Option<Profile> {
    let name = listing(s)?.name?;
    Some(Profile::Company(CompanyProfile {
        name: name.to_string(),
        website: None,
        summary: None,
        address: None,
        sector: None,
        industry: None,
        isin: None,
    }))
}

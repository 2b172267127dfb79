use cedola_core::{Capability, CedolaError};

/// Collapse a set of provider errors into a uniform `CedolaError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<CedolaError>,
    not_found_what: Option<String>,
) -> CedolaError {
    if !attempted_any {
        return CedolaError::unsupported(capability.to_string());
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, CedolaError::NotFound { .. }))
    {
        return CedolaError::not_found(what);
    }
    CedolaError::AllProvidersFailed(errors)
}

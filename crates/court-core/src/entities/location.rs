//! Location reference data
//!
//! Courts themselves are seed data managed out-of-band; the domain
//! only ever reads the distinct locations they describe.

/// A distinct location with its image, as shown on the locations page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub location: String,
    pub image: String,
}

//! Share-link resolution: the Fetch → Extract → delayed hop state machine.
//!
//! One attempt validates and normalizes the input, fetches the page, and
//! extracts a link. A pre-download redirect triggers at most
//! [`HopPolicy::max_hops`] further fetch cycles, each after a fixed delay;
//! a direct link is terminal success; anything else is a terminal error.

mod error;
mod policy;
mod run;

pub use error::ResolveError;
pub use policy::HopPolicy;
pub use run::{resolve_direct_link, ResolvedLink};

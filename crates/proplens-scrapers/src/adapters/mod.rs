//! One extraction adapter per supported site.
//!
//! Adding a site means writing a new adapter here and registering it in
//! the site registry; the orchestrator and renderer are never touched.

mod generic;
mod realtor_ca;
mod zolo;

pub use generic::GenericAdapter;
pub use realtor_ca::RealtorCaAdapter;
pub use zolo::ZoloAdapter;

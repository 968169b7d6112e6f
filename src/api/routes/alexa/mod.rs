pub mod public;
mod router;
pub mod skill;

pub use router::router;

//! Wireless scanner capability and scan dump parsing.
//!
//! The classifier core never talks to radio hardware; it consumes
//! [`Observation`]s — maps from source name to signal strength — produced by
//! something implementing [`SignalScanner`]. This crate provides the trait,
//! the observation type, a parser for recorded scanner dumps (serial-port
//! captures of a scanning firmware), and a [`ReplayScanner`] that feeds
//! recorded dumps back through the capability seam.

pub mod error;
pub mod observation;
pub mod parse;
pub mod replay;

pub use error::ScanError;
pub use observation::Observation;
pub use parse::parse_dump;
pub use replay::ReplayScanner;

/// Capability interface for acquiring live observations.
///
/// A hardware-backed implementation wraps whatever enumeration API the
/// platform offers; consumers depend only on the output shape.
pub trait SignalScanner {
    /// Performs one scan and returns the observed sources.
    fn scan(&mut self) -> Result<Observation, ScanError>;
}

//! Ferrous Root Infrastructure Layer
pub mod dns;
pub mod extension;
pub mod signing;

//! Trait definitions for the curvedh public API

pub mod kex;

pub use kex::KeyAgreement;

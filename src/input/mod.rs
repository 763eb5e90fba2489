//! Input adapters: turn command-line arguments and session scripts into
//! controller calls.

pub mod cli;

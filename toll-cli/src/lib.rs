//! Console front end for the `congestion-toll` calculator.

pub mod cli;

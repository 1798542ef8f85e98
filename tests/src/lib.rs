#![cfg(test)]
//! Scenario tests for the full expand → probe → summarize pipeline, run
//! against a scripted reachability double on a paused clock.

mod doubles;
mod scenarios;

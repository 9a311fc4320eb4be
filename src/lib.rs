//! Authenticated relay in front of the Monkeytype API, plus the terminal
//! dashboard that fetches personal-best typing stats through it.
//!
//! The relay (`mtrelay`) accepts a JSON description of one outbound request,
//! attaches the `ApeKey` credential server-side, performs exactly one
//! upstream call and hands the response back; browsers are admitted by a
//! strict origin allow-list. The dashboard (`mtdash`) probes candidate
//! endpoints through the relay, folds the payload into two numbers and
//! counts them up on screen.

pub mod config;
pub mod dashboard;
pub mod handler;
pub mod logging;
pub mod metrics;
pub mod stats;

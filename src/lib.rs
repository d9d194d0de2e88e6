//! Stockpot: a seed-data service for the FlashFood delivery backend.
//!
//! Stockpot keeps a remote backend populated with a minimum number of realistic
//! records for every entity kind the platform knows about, in strict dependency
//! order, and serves the aggregated snapshot over HTTP. A background growth loop
//! trickles additional records in over time to simulate organic activity.

pub mod backend;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod growth;
pub mod model;
pub mod pool;
pub mod router;
pub mod startup;
pub mod util;

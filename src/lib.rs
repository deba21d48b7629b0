//! # Chainstat
//!
//! Transaction statistics over block sequences exported by blockchain nodes

#[macro_use]
extern crate serde;
#[macro_use]
extern crate tracing;

pub mod analysis;
pub mod blockchain;
pub mod bridge;
pub mod report;

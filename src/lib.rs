//! Greeting relay service.
//!
//! Exposes one HTTP operation: `POST /api/v1/contract` takes a greeting
//! string and submits a signed EIP-1559 transaction invoking
//! `setGreeting(string)` on a fixed contract, after querying a gas-station
//! oracle for current fee recommendations.
//!
//! # Architecture Overview
//!
//! ```text
//!  POST /api/v1/contract
//!        │
//!        ▼
//!  ┌───────────┐   ┌──────────────┐   ┌───────────────────────────────┐
//!  │   http    │──▶│   greeting   │──▶│          blockchain           │
//!  │  server   │   │   pipeline   │   │ wallet → client → transaction │
//!  └─────┬─────┘   └──────┬───────┘   └───────────────────────────────┘
//!        │                │
//!        │                ├──▶ config  (secrets, reloaded per request)
//!        │                └──▶ fees    (gas-station oracle client)
//!        │
//!        └──▶ observability (completion line + failure summary/detail)
//! ```
//!
//! The pipeline is stateless between requests: secrets, fee quote, and
//! transaction all live and die within one submission.

pub mod blockchain;
pub mod config;
pub mod fees;
pub mod greeting;
pub mod http;
pub mod observability;

pub use config::schema::{Environment, Secrets};
pub use greeting::GreetingService;
pub use http::HttpServer;

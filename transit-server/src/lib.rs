//! Bus route planner server.
//!
//! A web application that answers: "Which bus gets me from here to there?"
//! It suggests direct routes, a single transfer when no route serves the
//! trip directly, and tracks live bus positions for the map client.

pub mod config;
pub mod domain;
pub mod history;
pub mod live;
pub mod network;
pub mod planner;
pub mod store;
pub mod web;

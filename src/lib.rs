//! Clipact - copy/cut clipboard actions over a pluggable host page
//!
//! This crate provides the core logic for triggering a plain-text copy or
//! cut of either literal text or the content of a page element, reporting
//! the outcome through an event notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (actions, element references) and errors
//! - **Application**: The clipboard request use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (in-memory page, arboard, config, notifiers)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

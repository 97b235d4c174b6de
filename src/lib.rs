//! # Curio
//!
//! A content-curation pipeline and personal library for the terminal.
//!
//! ## Architecture
//!
//! Curio follows a modular pipeline architecture:
//!
//! ```text
//! Orchestrator → Normalizer → Store → Filter → CLI
//! ```
//!
//! - [`scrape`]: tool discovery and invocation against a remote automation
//!   server, with normalization and a seeded fallback
//! - [`store`]: in-memory item collection, the source of truth
//! - [`library`]: optimistic save/unsave with commit-or-revert
//! - [`filter`]: pure view filtering (feed/saved, query, source)
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the feed
//! curio feed
//!
//! # Pull trending items from the automation workflow
//! CURIO_ENDPOINT=https://automation.example.com/rpc \
//! CURIO_AUTH_TOKEN=... curio scrape
//!
//! # Save an item and generate hooks for it
//! curio save 3f1a
//! curio hooks 3f1a
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// store, orchestrator, library, hook generator.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `feed [--query] [--source] [--saved]` - Show the filtered feed
/// - `scrape` - Trigger the scrape workflow
/// - `show <id>` - Show an item's full content
/// - `save <id>` / `unsave <id>` - Toggle library membership
/// - `hooks <id>` - Generate social-media hooks
/// - `open <id>` - Open an item in the browser
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/curio/config.toml` with `CURIO_ENDPOINT` /
/// `CURIO_AUTH_TOKEN` environment overrides for the remote credentials.
pub mod config;

/// Core domain models.
///
/// - [`ContentItem`](domain::ContentItem): a curated item with SHA256 IDs
/// - [`GeneratedHook`](domain::GeneratedHook): a platform-tagged promo text
pub mod domain;

/// Pure view filtering over the store's items.
pub mod filter;

/// Social-media hook generation behind the
/// [`HookGenerator`](hooks::HookGenerator) trait.
pub mod hooks;

/// The saved-items library and its optimistic toggle protocol.
pub mod library;

/// Persistence adapter for saved items.
///
/// - [`Persistence`](persist::Persistence): async trait for the remote store
/// - [`SimulatedRemote`](persist::SimulatedRemote): fixed-latency stand-in
pub mod persist;

/// Bundled sample content (startup seed and scrape fallback).
pub mod samples;

/// Scrape orchestration.
///
/// - [`ScrapeOrchestrator`](scrape::ScrapeOrchestrator): discovery → match →
///   invoke → normalize, degrading to fallback data on any failure
/// - [`RpcClient`](scrape::RpcClient): JSON-RPC 2.0 transport trait
/// - [`ScrapeOutcome`](scrape::ScrapeOutcome): items tagged live/fallback
pub mod scrape;

/// In-memory content store.
pub mod store;

//! # Gistsync Architecture
//!
//! Gistsync keeps local files in sync with remote gists by shelling out to an
//! external gist tool and recording each file's remote id in a sidecar
//! dotfolder. The crate is a library with a thin CLI client on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Sync orchestration, pure logic, no I/O assumptions       │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                     │
//!                    ▼                     ▼
//! ┌──────────────────────────┐ ┌──────────────────────────────┐
//! │  Storage (store/)        │ │  Runner (runner/)            │
//! │  - IdStore trait         │ │  - CommandRunner trait       │
//! │  - FileStore, InMemory   │ │  - SystemRunner, FakeRunner  │
//! └──────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular types
//! (`Result<CmdResult>`), and never writes to stdout or calls
//! `std::process::exit`. The two impure edges are `FileStore` (dotfolder
//! reads/writes) and `SystemRunner` (process spawning plus its stderr
//! diagnostic line), both swappable behind traits.
//!
//! ## Sync semantics
//!
//! Per filename, in argument order: if a sidecar id exists the tool is run in
//! update mode (`gist -u <id> <file>`); otherwise in create mode
//! (`gist <file>`), the printed URL's last path segment becomes the id, and a
//! sidecar is written. Any failure aborts that filename only — the run always
//! continues, and the process still exits 0.
//!
//! ## Module overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: sync, status and config command logic
//! - [`store`]: sidecar id storage, trait plus fs/memory backends
//! - [`runner`]: external command invocation, trait plus system/fake backends
//! - [`model`]: core types (`TrackedGist`, `SyncOutcome`, `SyncReport`)
//! - [`config`]: persisted configuration (tool name, dotfolder)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod store;

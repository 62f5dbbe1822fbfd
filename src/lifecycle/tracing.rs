//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`) to keep lines short.
//!
//! ## What Gets Traced
//!
//! - **Simulator lifecycle** (`info`): start, replace, shutdown with the tick count
//! - **Ticks** (`debug`): arrived/resolved ids, evictions and collection size
//! - **Client calls** (`debug`): one span per request
//! - **Loading** (`info`/`warn`): source name, record count, invariant violations
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle only
//! RUST_LOG=debug cargo run    # every tick
//! ```
//!
//! With `RUST_LOG=debug` a tick looks like:
//!
//! ```text
//! DEBUG Tick tick=3 arrived=Some(58) resolved=None evicted=0 size=58
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! HTTP application assembly for Tally.
//!
//! The application is an explicit list of [`RouteMount`]s nested into one
//! router, optionally guarded by Basic auth, with request tracing on top.
//! There is no global state: the store handle travels inside each router.

pub mod auth;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware};
use serde::Deserialize;
use tally_core::store::OutcomesStore;
use tower_http::trace::TraceLayer;

use auth::{AuthConfig, require_auth};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TALLY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:               String,
  #[serde(default = "default_port")]
  pub port:               u16,
  #[serde(default = "default_store_path")]
  pub store_path:         PathBuf,
  pub auth_username:      Option<String>,
  pub auth_password_hash: Option<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

fn default_store_path() -> PathBuf { PathBuf::from("tally.db") }

impl ServerConfig {
  /// Basic-auth credentials, if both halves are configured.
  pub fn auth(&self) -> Option<AuthConfig> {
    match (&self.auth_username, &self.auth_password_hash) {
      (Some(username), Some(password_hash)) => Some(AuthConfig {
        username:      username.clone(),
        password_hash: password_hash.clone(),
      }),
      _ => None,
    }
  }
}

// ─── Route table ─────────────────────────────────────────────────────────────

/// One entry of the route table: a fully-stated router and where it lives.
pub struct RouteMount {
  pub prefix: &'static str,
  pub router: Router,
}

impl RouteMount {
  pub fn new(prefix: &'static str, router: Router) -> Self {
    Self { prefix, router }
  }
}

/// The standard route table over `store`.
pub fn default_routes<S>(store: Arc<S>) -> Vec<RouteMount>
where
  S: OutcomesStore + 'static,
{
  vec![
    RouteMount::new("/api/program_outcomes", tally_api::program_outcomes_router(store.clone())),
    RouteMount::new("/api/kitchen_outcomes", tally_api::kitchen_outcomes_router(store.clone())),
    RouteMount::new("/api/organization", tally_api::organization_router(store)),
  ]
}

/// Build the HTTP application from an explicit route table.
///
/// When `auth` is set, every mounted route requires valid Basic credentials.
pub fn app(routes: Vec<RouteMount>, auth: Option<AuthConfig>) -> Router {
  let mut router = Router::new();
  for mount in routes {
    tracing::debug!(prefix = mount.prefix, "mounting routes");
    router = router.nest(mount.prefix, mount.router);
  }

  if let Some(auth) = auth {
    router = router.layer(middleware::from_fn_with_state(Arc::new(auth), require_auth));
  }

  router.layer(TraceLayer::new_for_http())
}

// Dispatch
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service to coordinate drivers and the tours they are assigned to.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use axum::Router;
use dispatch_core::clocks::{Clock, SystemClock};
use dispatch_core::db::DbResult;
use dispatch_core::env::get_optional_var;
use log::info;
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub(crate) mod db;
use db::fixtures;
use db::memory::MemoryStore;
pub(crate) mod driver;
use driver::Dispatcher;
pub(crate) mod model;
mod rest;
use rest::app;

/// Configuration options for the server.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerOptions {
    /// Address to listen on.
    pub bind_addr: Ipv4Addr,

    /// Port to listen on.
    pub port: u16,

    /// Whether to populate the store with sample drivers and tours at startup.
    pub seed_fixtures: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self { bind_addr: Ipv4Addr::LOCALHOST, port: 3000, seed_fixtures: true }
    }
}

impl ServerOptions {
    /// Initializes a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_BIND_ADDR`, `<prefix>_PORT` and
    /// `<prefix>_SEED_FIXTURES`.  Any variable that is not set takes its default value.
    pub fn from_env(prefix: &str) -> Result<ServerOptions, String> {
        let defaults = ServerOptions::default();
        Ok(ServerOptions {
            bind_addr: get_optional_var::<Ipv4Addr>(prefix, "BIND_ADDR")?
                .unwrap_or(defaults.bind_addr),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(defaults.port),
            seed_fixtures: get_optional_var::<bool>(prefix, "SEED_FIXTURES")?
                .unwrap_or(defaults.seed_fixtures),
        })
    }

    /// Returns the socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.bind_addr, self.port))
    }
}

/// Creates the application backed by a fresh store, optionally seeded with sample data whose
/// dates are relative to `clock`.
async fn setup(seed_fixtures: bool, clock: &dyn Clock) -> DbResult<Router> {
    let store = Arc::new(MemoryStore::default());
    if seed_fixtures {
        fixtures::seed(store.as_ref(), clock).await?;
    }
    Ok(app(Dispatcher::new(store)))
}

/// Instantiates all resources to serve the application as configured by `opts`.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve(opts: ServerOptions) -> Result<(), Box<dyn Error>> {
    let app = setup(opts.seed_fixtures, &SystemClock::default()).await?;

    let listener = tokio::net::TcpListener::bind(opts.socket_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

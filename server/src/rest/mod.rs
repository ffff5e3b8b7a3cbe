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

//! Entry point to the REST server.

use crate::driver::Dispatcher;
use axum::Router;
use tower_http::cors::CorsLayer;

mod driver_get;
mod driver_put;
mod drivers_get;
mod drivers_location_get;
mod drivers_post;
#[cfg(test)]
mod testutils;
mod tour_delete;
mod tour_get;
mod tour_put;
mod tours_get;
mod tours_post;

/// Creates the router for the application.
pub(crate) fn app(dispatcher: Dispatcher) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/api/drivers", get(drivers_get::handler).post(drivers_post::handler))
        .route("/api/drivers/:id", get(driver_get::handler).put(driver_put::handler))
        .route("/api/drivers/location/:location", get(drivers_location_get::handler))
        .route("/api/tours", get(tours_get::handler).post(tours_post::handler))
        .route(
            "/api/tours/:id",
            get(tour_get::handler).put(tour_put::handler).delete(tour_delete::handler),
        )
        .layer(CorsLayer::permissive())
        .with_state(dispatcher)
}

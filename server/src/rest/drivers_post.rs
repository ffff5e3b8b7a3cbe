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

//! API to register a new driver.

use crate::driver::Dispatcher;
use crate::model::NewDriver;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, http};
use dispatch_core::rest::{JsonBody, RestError};
use serde::Deserialize;

/// Message sent to the server to register a driver.
#[derive(Deserialize)]
pub(crate) struct CreateDriverRequest {
    /// Full name of the driver.
    name: String,

    /// Home location of the driver.
    location: String,
}

/// API handler.
pub(crate) async fn handler(
    State(dispatcher): State<Dispatcher>,
    JsonBody(request): JsonBody<CreateDriverRequest>,
) -> Result<impl IntoResponse, RestError> {
    let new = NewDriver::new(request.name, request.location)?;
    let driver = dispatcher.create_driver(new).await?;
    Ok((http::StatusCode::CREATED, Json(driver)))
}

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

//! API to list all drivers.

use crate::driver::Dispatcher;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use dispatch_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(dispatcher): State<Dispatcher>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let drivers = dispatcher.get_drivers().await?;
    Ok(Json(drivers))
}

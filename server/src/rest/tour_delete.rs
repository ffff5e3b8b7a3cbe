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

//! API to delete a tour.

use crate::driver::Dispatcher;
use crate::model::TourId;
use axum::extract::{Path, State};
use axum::http;
use dispatch_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(dispatcher): State<Dispatcher>,
    Path(id): Path<String>,
    _: EmptyBody,
) -> Result<http::StatusCode, RestError> {
    let id = id.parse::<TourId>()?;
    dispatcher.delete_tour(id).await?;
    Ok(http::StatusCode::NO_CONTENT)
}

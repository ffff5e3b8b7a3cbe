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

//! API to modify an existing tour.

use crate::driver::Dispatcher;
use crate::model::{Assignment, ShipmentDate, TourId, TourUpdate};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use dispatch_core::rest::{JsonBody, RestError};
use serde::Deserialize;

/// Message sent to the server to modify a tour.  Missing fields keep their current values.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTourRequest {
    /// New name of the customer.
    customer_name: Option<String>,

    /// New shipment day.
    shipment_date: Option<ShipmentDate>,

    /// New origin of the tour.
    location_from: Option<String>,

    /// New destination of the tour.
    location_to: Option<String>,

    /// Change to the assigned driver: absent keeps it, `null` removes it.
    #[serde(default)]
    driver_id: Assignment,
}

/// API handler.
pub(crate) async fn handler(
    State(dispatcher): State<Dispatcher>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateTourRequest>,
) -> Result<impl IntoResponse, RestError> {
    let id = id.parse::<TourId>()?;
    let update = TourUpdate::new(
        request.customer_name,
        request.shipment_date,
        request.location_from,
        request.location_to,
        request.driver_id,
    )?;
    let tour = dispatcher.update_tour(id, update).await?;
    Ok(Json(tour))
}

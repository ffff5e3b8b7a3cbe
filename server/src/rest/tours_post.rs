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

//! API to schedule a new tour.

use crate::driver::Dispatcher;
use crate::model::{DriverId, NewTour, ShipmentDate};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, http};
use dispatch_core::rest::{JsonBody, RestError};
use serde::Deserialize;

/// Message sent to the server to schedule a tour.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTourRequest {
    /// Name of the customer that ordered the shipment.
    customer_name: String,

    /// Day on which the shipment leaves.
    shipment_date: ShipmentDate,

    /// Origin of the tour.
    location_from: String,

    /// Destination of the tour.
    location_to: String,

    /// Driver to assign to the tour, if any.
    #[serde(default)]
    driver_id: Option<DriverId>,
}

/// API handler.
pub(crate) async fn handler(
    State(dispatcher): State<Dispatcher>,
    JsonBody(request): JsonBody<CreateTourRequest>,
) -> Result<impl IntoResponse, RestError> {
    let new = NewTour::new(
        request.customer_name,
        request.shipment_date,
        request.location_from,
        request.location_to,
        request.driver_id,
    )?;
    let tour = dispatcher.create_tour(new).await?;
    Ok((http::StatusCode::CREATED, Json(tour)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::model::*;
    use crate::rest::testutils::*;
    use dispatch_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/api/tours".to_owned())
    }

    #[tokio::test]
    async fn test_ok_unassigned() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "2025-06-01T10:00:00Z",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(
            json!({
                "id": 1,
                "customerName": "Acme",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
                "driverId": null,
            }),
            response
        );
    }

    #[tokio::test]
    async fn test_ok_with_driver() {
        let context = TestContext::setup();
        let anna = context.insert_driver("Anna", "Berlin").await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "2025-06-01",
                "locationFrom": "berlin",
                "locationTo": "Hamburg",
                "driverId": 1,
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Tour>()
            .await;
        assert_eq!(Some(*anna.id()), *response.driver_id());
        assert_eq!(response, context.get_tour(*response.id()).await);
    }

    #[tokio::test]
    async fn test_round_trip() {
        let context = TestContext::setup();

        let created = OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "24.12.2025",
                "locationFrom": "Dresden",
                "locationTo": "Leipzig",
                "driverId": null,
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Tour>()
            .await;

        let fetched = OneShotBuilder::new(
            context.app(),
            (http::Method::GET, format!("/api/tours/{}", created.id())),
        )
        .send_empty()
        .await
        .expect_json::<Tour>()
        .await;
        assert_eq!(created, fetched);
        assert_eq!("2025-12-24", fetched.shipment_date().to_string());
    }

    #[tokio::test]
    async fn test_ids_never_reused() {
        let context = TestContext::setup();
        let request = json!({
            "customerName": "Acme",
            "shipmentDate": "2025-06-01",
            "locationFrom": "Berlin",
            "locationTo": "Hamburg",
        });

        let mut ids = vec![];
        for _ in 0..2 {
            let tour = OneShotBuilder::new(context.app(), route())
                .send_json(&request)
                .await
                .expect_status(http::StatusCode::CREATED)
                .expect_json::<Tour>()
                .await;
            ids.push(tour.id().as_u32());
        }

        OneShotBuilder::new(context.app(), (http::Method::DELETE, "/api/tours/2"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        let tour = OneShotBuilder::new(context.app(), route())
            .send_json(&request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Tour>()
            .await;
        ids.push(tour.id().as_u32());

        assert_eq!(vec![1, 2, 3], ids);
    }

    #[tokio::test]
    async fn test_driver_not_found() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
                "driverId": 3,
            }))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("^Driver not found$")
            .await;

        assert!(context.store().get_tours().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_location_mismatch() {
        let context = TestContext::setup();
        context.insert_driver("Bob", "Hamburg").await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
                "locationTo": "Munich",
                "driverId": 1,
            }))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Driver location must match the tour's starting location")
            .await;

        assert!(context.store().get_tours().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_shipment_date() {
        OneShotBuilder::new(TestContext::setup().into_app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "soon",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
            }))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Invalid shipment date 'soon'")
            .await;
    }

    #[tokio::test]
    async fn test_empty_customer_name() {
        OneShotBuilder::new(TestContext::setup().into_app(), route())
            .send_json(json!({
                "customerName": "",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
            }))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Customer name cannot be empty")
            .await;
    }

    #[tokio::test]
    async fn test_missing_field() {
        OneShotBuilder::new(TestContext::setup().into_app(), route())
            .send_json(json!({
                "customerName": "Acme",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
            }))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("missing field `locationTo`")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route());
}

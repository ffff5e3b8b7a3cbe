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

//! Test utilities for the REST API.

use crate::db::Store;
use crate::db::memory::MemoryStore;
use crate::driver::Dispatcher;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use std::sync::Arc;

/// State of a running test of the REST API.
pub(crate) struct TestContext {
    /// Store backing the app, for direct inspection and setup.
    store: Arc<MemoryStore>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app backed by an empty store.
    pub(crate) fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();

        let store = Arc::new(MemoryStore::default());
        let app = app(Dispatcher::new(store.clone()));
        Self { store, app }
    }

    /// Gets a copy of the app to issue one request.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app to issue one request.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Gets direct access to the store backing the app.
    pub(crate) fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Creates a driver directly in the store.
    pub(crate) async fn insert_driver(&self, name: &'static str, location: &'static str) -> Driver {
        self.store.create_driver(NewDriver::new(name, location).unwrap()).await.unwrap()
    }

    /// Creates a tour directly in the store, bypassing any assignment checks.
    pub(crate) async fn insert_tour(
        &self,
        customer_name: &'static str,
        shipment_date: &'static str,
        from: &'static str,
        to: &'static str,
        driver: Option<DriverId>,
    ) -> Tour {
        let new =
            NewTour::new(customer_name, ShipmentDate::from(shipment_date), from, to, driver)
                .unwrap();
        self.store.create_tour(new).await.unwrap()
    }

    /// Gets a tour directly from the store.
    pub(crate) async fn get_tour(&self, id: TourId) -> Tour {
        self.store.get_tour(id).await.unwrap()
    }
}

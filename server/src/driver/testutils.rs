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

//! Test utilities for the business layer.

use crate::db::Store;
use crate::db::memory::MemoryStore;
use crate::driver::Dispatcher;
use crate::model::*;
use std::sync::Arc;

/// State of a running test of the business layer.
pub(crate) struct TestContext {
    /// Store backing the dispatcher, for direct inspection and setup.
    store: Arc<MemoryStore>,

    /// Dispatcher under test.
    dispatcher: Dispatcher,
}

impl TestContext {
    /// Initializes a dispatcher backed by an empty store.
    pub(crate) fn setup() -> Self {
        let _can_fail = env_logger::builder().is_test(true).try_init();

        let store = Arc::new(MemoryStore::default());
        let dispatcher = Dispatcher::new(store.clone());
        Self { store, dispatcher }
    }

    /// Gets direct access to the store backing the dispatcher.
    pub(crate) fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Gets a copy of the dispatcher to issue one operation.
    pub(crate) fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Creates a driver directly in the store, bypassing the business logic.
    pub(crate) async fn insert_driver(&self, name: &'static str, location: &'static str) -> Driver {
        self.store.create_driver(NewDriver::new(name, location).unwrap()).await.unwrap()
    }

    /// Creates a tour from `from` to Frankfurt directly in the store, bypassing the business
    /// logic and thus any assignment checks.
    pub(crate) async fn insert_tour(&self, from: &'static str, driver: Option<DriverId>) -> Tour {
        let new =
            NewTour::new("Customer", ShipmentDate::from("2025-06-01"), from, "Frankfurt", driver)
                .unwrap();
        self.store.create_tour(new).await.unwrap()
    }
}

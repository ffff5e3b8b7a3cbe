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

//! Storage abstraction in terms of the operations needed by the server.

use crate::model::*;
use dispatch_core::db::DbResult;

pub(crate) mod fixtures;
pub(crate) mod memory;

/// A store with high-level operations that deal with our types.
///
/// Identifiers are assigned by the store on creation and are never reused, even after the entity
/// they named has been deleted.  All list operations return entities sorted by identifier.
#[async_trait::async_trait]
pub(crate) trait Store: Send + Sync {
    /// Gets a list of all existing drivers.
    async fn get_drivers(&self) -> DbResult<Vec<Driver>>;

    /// Gets the driver identified by `id`.
    async fn get_driver(&self, id: DriverId) -> DbResult<Driver>;

    /// Stores a new driver and returns it with its freshly-assigned identifier.
    async fn create_driver(&self, new: NewDriver) -> DbResult<Driver>;

    /// Applies `update` to the driver identified by `id` and returns the result.
    async fn update_driver(&self, id: DriverId, update: DriverUpdate) -> DbResult<Driver>;

    /// Gets all drivers based in `location`, comparing names case-insensitively.
    async fn get_drivers_by_location(&self, location: &str) -> DbResult<Vec<Driver>>;

    /// Gets a list of all existing tours.
    async fn get_tours(&self) -> DbResult<Vec<Tour>>;

    /// Gets the tour identified by `id`.
    async fn get_tour(&self, id: TourId) -> DbResult<Tour>;

    /// Stores a new tour and returns it with its freshly-assigned identifier.
    async fn create_tour(&self, new: NewTour) -> DbResult<Tour>;

    /// Applies `update` to the tour identified by `id` and returns the result.
    async fn update_tour(&self, id: TourId, update: TourUpdate) -> DbResult<Tour>;

    /// Deletes the tour identified by `id`.
    async fn delete_tour(&self, id: TourId) -> DbResult<()>;
}

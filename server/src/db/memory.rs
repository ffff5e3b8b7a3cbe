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

//! Implementation of the storage abstraction that keeps all data in memory.

use crate::db::Store;
use crate::model::*;
use dispatch_core::db::{DbError, DbResult};
use futures::lock::Mutex;
use std::collections::BTreeMap;

/// Collection of entities of one type plus the counter used to name new ones.
struct Table<T> {
    /// Identifier to assign to the next entity that is created, or `None` once every identifier
    /// up to and including `u32::MAX` has been handed out.
    next_id: Option<u32>,

    /// Stored entities keyed by the raw value of their identifier.
    rows: BTreeMap<u32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { next_id: Some(1), rows: BTreeMap::default() }
    }
}

impl<T: Clone> Table<T> {
    /// Reserves a new identifier.  Identifiers are never handed out twice.
    fn allocate_id(&mut self) -> DbResult<u32> {
        let id = self
            .next_id
            .ok_or_else(|| DbError::BackendError("Ran out of identifiers".to_owned()))?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Returns copies of all entities in identifier order.
    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Returns a copy of the entity with the raw identifier `id`.
    fn get(&self, id: u32) -> DbResult<T> {
        self.rows.get(&id).cloned().ok_or(DbError::NotFound)
    }

    /// Replaces the entity with the raw identifier `id` with the result of `f`.
    fn modify<F>(&mut self, id: u32, f: F) -> DbResult<T>
    where
        F: FnOnce(T) -> T,
    {
        let row = self.rows.get_mut(&id).ok_or(DbError::NotFound)?;
        *row = f(row.clone());
        Ok(row.clone())
    }
}

/// A store backed by in-process maps.  Contents are lost when the process exits.
#[derive(Default)]
pub(crate) struct MemoryStore {
    /// All known drivers.
    drivers: Mutex<Table<Driver>>,

    /// All known tours.
    tours: Mutex<Table<Tour>>,
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn get_drivers(&self) -> DbResult<Vec<Driver>> {
        let drivers = self.drivers.lock().await;
        Ok(drivers.all())
    }

    async fn get_driver(&self, id: DriverId) -> DbResult<Driver> {
        let drivers = self.drivers.lock().await;
        drivers.get(id.as_u32())
    }

    async fn create_driver(&self, new: NewDriver) -> DbResult<Driver> {
        let mut drivers = self.drivers.lock().await;
        let id = drivers.allocate_id()?;
        let driver = new.into_driver(DriverId::new(id));
        drivers.rows.insert(id, driver.clone());
        Ok(driver)
    }

    async fn update_driver(&self, id: DriverId, update: DriverUpdate) -> DbResult<Driver> {
        let mut drivers = self.drivers.lock().await;
        drivers.modify(id.as_u32(), |driver| driver.apply(update))
    }

    async fn get_drivers_by_location(&self, location: &str) -> DbResult<Vec<Driver>> {
        let drivers = self.drivers.lock().await;
        Ok(drivers
            .rows
            .values()
            .filter(|driver| same_location(driver.location(), location))
            .cloned()
            .collect())
    }

    async fn get_tours(&self) -> DbResult<Vec<Tour>> {
        let tours = self.tours.lock().await;
        Ok(tours.all())
    }

    async fn get_tour(&self, id: TourId) -> DbResult<Tour> {
        let tours = self.tours.lock().await;
        tours.get(id.as_u32())
    }

    async fn create_tour(&self, new: NewTour) -> DbResult<Tour> {
        let mut tours = self.tours.lock().await;
        let id = tours.allocate_id()?;
        let tour = new.into_tour(TourId::new(id));
        tours.rows.insert(id, tour.clone());
        Ok(tour)
    }

    async fn update_tour(&self, id: TourId, update: TourUpdate) -> DbResult<Tour> {
        let mut tours = self.tours.lock().await;
        tours.modify(id.as_u32(), |tour| tour.apply(update))
    }

    async fn delete_tour(&self, id: TourId) -> DbResult<()> {
        let mut tours = self.tours.lock().await;
        match tours.rows.remove(&id.as_u32()) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Advances the identifier counters so that only `u32::MAX` remains to be handed out.
    pub(crate) async fn reserve_all_but_last_id(&self) {
        self.drivers.lock().await.next_id = Some(u32::MAX);
        self.tours.lock().await.next_id = Some(u32::MAX);
    }
}

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

//! Operations on drivers.

use crate::driver::{Dispatcher, driver_not_found};
use crate::model::*;
use dispatch_core::driver::DriverResult;
use log::info;

impl Dispatcher {
    /// Gets all drivers.
    pub(crate) async fn get_drivers(self) -> DriverResult<Vec<Driver>> {
        Ok(self.store.get_drivers().await?)
    }

    /// Gets the driver identified by `id`.
    pub(crate) async fn get_driver(self, id: DriverId) -> DriverResult<Driver> {
        self.store.get_driver(id).await.map_err(driver_not_found)
    }

    /// Registers a new driver.
    pub(crate) async fn create_driver(self, new: NewDriver) -> DriverResult<Driver> {
        let driver = self.store.create_driver(new).await?;
        info!("Created driver {} ({}) based in {}", driver.id(), driver.name(), driver.location());
        Ok(driver)
    }

    /// Modifies the driver identified by `id`.
    ///
    /// Tours already assigned to the driver are not re-validated if the driver's location changes.
    pub(crate) async fn update_driver(
        self,
        id: DriverId,
        update: DriverUpdate,
    ) -> DriverResult<Driver> {
        let driver = self.store.update_driver(id, update).await.map_err(driver_not_found)?;
        info!("Updated driver {} ({}) based in {}", driver.id(), driver.name(), driver.location());
        Ok(driver)
    }

    /// Gets all drivers based in `location`, ignoring case.
    pub(crate) async fn get_drivers_by_location(self, location: &str) -> DriverResult<Vec<Driver>> {
        Ok(self.store.get_drivers_by_location(location).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::driver::testutils::*;
    use dispatch_core::driver::DriverError;

    #[tokio::test]
    async fn test_get_drivers() {
        let context = TestContext::setup();
        assert!(context.dispatcher().get_drivers().await.unwrap().is_empty());

        let anna = context.insert_driver("Anna", "Berlin").await;
        let bob = context.insert_driver("Bob", "Hamburg").await;
        assert_eq!(vec![anna, bob], context.dispatcher().get_drivers().await.unwrap());
    }

    #[tokio::test]
    async fn test_get_driver_ok() {
        let context = TestContext::setup();
        let anna = context.insert_driver("Anna", "Berlin").await;

        assert_eq!(anna, context.dispatcher().get_driver(*anna.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_driver_not_found() {
        let context = TestContext::setup();

        assert_eq!(
            DriverError::NotFound("Driver not found".to_owned()),
            context.dispatcher().get_driver(DriverId::new(1)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_create_driver() {
        let context = TestContext::setup();

        let new = NewDriver::new("Anna", "Berlin").unwrap();
        let anna = context.dispatcher().create_driver(new).await.unwrap();
        assert_eq!(DriverId::new(1), *anna.id());
        assert_eq!(anna, context.store().get_driver(*anna.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_driver_does_not_touch_tours() {
        let context = TestContext::setup();
        let anna = context.insert_driver("Anna", "Berlin").await;
        let tour = context.insert_tour("Berlin", Some(*anna.id())).await;

        let update = DriverUpdate::new(None, Some("Hamburg".to_owned())).unwrap();
        let anna = context.dispatcher().update_driver(*anna.id(), update).await.unwrap();
        assert_eq!("Anna", anna.name());
        assert_eq!("Hamburg", anna.location());

        assert_eq!(tour, context.store().get_tour(*tour.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_driver_not_found() {
        let context = TestContext::setup();

        assert_eq!(
            DriverError::NotFound("Driver not found".to_owned()),
            context
                .dispatcher()
                .update_driver(DriverId::new(3), DriverUpdate::default())
                .await
                .unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_drivers_by_location() {
        let context = TestContext::setup();
        let anna = context.insert_driver("Anna", "Berlin").await;
        context.insert_driver("Bob", "Hamburg").await;

        assert_eq!(
            vec![anna],
            context.dispatcher().get_drivers_by_location("BERLIN").await.unwrap()
        );
        assert!(context.dispatcher().get_drivers_by_location("Munich").await.unwrap().is_empty());
    }
}

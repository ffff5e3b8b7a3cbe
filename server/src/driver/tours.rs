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

//! Operations on tours.

use crate::driver::assignment::assignment_to_check;
use crate::driver::{Dispatcher, tour_not_found};
use crate::model::*;
use dispatch_core::driver::DriverResult;
use log::info;

impl Dispatcher {
    /// Gets all tours.
    pub(crate) async fn get_tours(self) -> DriverResult<Vec<Tour>> {
        Ok(self.store.get_tours().await?)
    }

    /// Gets the tour identified by `id`.
    pub(crate) async fn get_tour(self, id: TourId) -> DriverResult<Tour> {
        self.store.get_tour(id).await.map_err(tour_not_found)
    }

    /// Schedules a new tour, ensuring that its driver, if any, is based at the tour's origin.
    pub(crate) async fn create_tour(self, new: NewTour) -> DriverResult<Tour> {
        if let Some(driver_id) = new.driver_id() {
            self.check_assignment(*driver_id, new.location_from()).await?;
        }

        let tour = self.store.create_tour(new).await?;
        info!("Created tour {} for customer {}", tour.id(), tour.customer_name());
        Ok(tour)
    }

    /// Modifies the tour identified by `id`.
    ///
    /// The driver/origin pairing is re-validated only if `update` assigns a driver or moves the
    /// origin of a tour that has a driver.  Unassigning a driver always succeeds.
    pub(crate) async fn update_tour(self, id: TourId, update: TourUpdate) -> DriverResult<Tour> {
        let tour = self.store.get_tour(id).await.map_err(tour_not_found)?;
        if let Some((driver_id, origin)) = assignment_to_check(&tour, &update) {
            self.check_assignment(driver_id, origin).await?;
        }

        let tour = self.store.update_tour(id, update).await.map_err(tour_not_found)?;
        match tour.driver_id() {
            Some(driver_id) => info!("Updated tour {} assigned to driver {}", tour.id(), driver_id),
            None => info!("Updated unassigned tour {}", tour.id()),
        }
        Ok(tour)
    }

    /// Deletes the tour identified by `id`.
    pub(crate) async fn delete_tour(self, id: TourId) -> DriverResult<()> {
        self.store.delete_tour(id).await.map_err(tour_not_found)?;
        info!("Deleted tour {}", id);
        Ok(())
    }
}

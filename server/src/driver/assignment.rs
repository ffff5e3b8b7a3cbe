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

//! Rules that keep tours and their drivers consistent.

use crate::driver::Dispatcher;
use crate::model::*;
use dispatch_core::db::DbError;
use dispatch_core::driver::{DriverError, DriverResult};
use log::warn;

/// Reasons why a driver cannot be assigned to a tour.
#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum AssignmentError {
    /// The requested driver does not exist.
    #[error("Driver not found")]
    DriverNotFound,

    /// The driver is based somewhere other than the tour's origin.
    #[error("Driver location must match the tour's starting location")]
    LocationMismatch,
}

impl From<AssignmentError> for DriverError {
    fn from(e: AssignmentError) -> Self {
        DriverError::InvalidInput(e.to_string())
    }
}

/// Determines which driver/origin pair has to be validated before applying `update` to `tour`.
///
/// Returns `None` when the update cannot introduce a mismatch: when it unassigns the driver, or
/// when it keeps the driver and does not touch the origin.
pub(super) fn assignment_to_check<'a>(
    tour: &'a Tour,
    update: &'a TourUpdate,
) -> Option<(DriverId, &'a str)> {
    let origin = update.location_from().as_deref().unwrap_or(tour.location_from().as_str());
    match update.driver() {
        Assignment::Unassign => None,
        Assignment::Assign(driver_id) => Some((*driver_id, origin)),
        Assignment::Keep => match (tour.driver_id(), update.location_from()) {
            (Some(driver_id), Some(_)) => Some((*driver_id, origin)),
            _ => None,
        },
    }
}

impl Dispatcher {
    /// Ensures that `driver_id` names an existing driver based at `origin`.
    pub(super) async fn check_assignment(
        &self,
        driver_id: DriverId,
        origin: &str,
    ) -> DriverResult<()> {
        let driver = match self.store.get_driver(driver_id).await {
            Ok(driver) => driver,
            Err(DbError::NotFound) => {
                warn!("Rejected assignment of unknown driver {}", driver_id);
                return Err(AssignmentError::DriverNotFound.into());
            }
            Err(e) => return Err(e.into()),
        };

        if !same_location(driver.location(), origin) {
            warn!(
                "Rejected assignment of driver {} based in {} to a tour from {}",
                driver_id,
                driver.location(),
                origin
            );
            return Err(AssignmentError::LocationMismatch.into());
        }

        Ok(())
    }
}

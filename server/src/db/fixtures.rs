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

//! Sample data to populate a fresh store with.

use crate::db::Store;
use crate::model::*;
use dispatch_core::clocks::Clock;
use dispatch_core::db::DbResult;
use log::debug;
use time::Duration;

/// Populates `store` with a few drivers and tours, scheduling tours relative to `clock`'s day.
///
/// The store should be empty so that the tours reference the drivers created here.
pub(crate) async fn seed(store: &dyn Store, clock: &dyn Clock) -> DbResult<()> {
    let john = store.create_driver(NewDriver::new("John Doe", "Berlin")?).await?;
    let maria = store.create_driver(NewDriver::new("Maria Schmidt", "Hamburg")?).await?;
    store.create_driver(NewDriver::new("Robert Wagner", "Munich")?).await?;

    let today = clock.today_utc();
    let tours = [
        ("Great Company", 0, "Berlin", "Hamburg", Some(*john.id())),
        ("Best Logistics", 7, "Hamburg", "Berlin", Some(*maria.id())),
        ("Premium Shipping", 14, "Munich", "Frankfurt", None),
    ];
    for (customer_name, days, from, to, driver_id) in tours {
        let date = ShipmentDate::new(today.saturating_add(Duration::days(days)));
        store.create_tour(NewTour::new(customer_name, date, from, to, driver_id)?).await?;
    }

    debug!("Seeded store with sample drivers and tours");
    Ok(())
}

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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Display;
use dispatch_core::model::{ModelError, ModelResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

mod shipment_date;
pub(crate) use shipment_date::ShipmentDate;
pub(crate) mod validation;
use validation::{require_driver_location, require_non_empty};

/// Generates the newtype for the identifier of an entity, which storage assigns on creation.
macro_rules! entity_id {
    ( $name:ident, $entity:literal ) => {
        #[doc = concat!("Identifier of a ", $entity, ".")]
        #[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(Serialize)]
        #[serde(transparent)]
        pub(crate) struct $name(u32);

        impl $name {
            /// Creates an identifier from its raw value.
            pub(crate) fn new(id: u32) -> Self {
                Self(id)
            }

            /// Returns the raw value of the identifier.
            pub(crate) fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> ModelResult<Self> {
                match s.parse::<u32>() {
                    Ok(id) if id > 0 => Ok(Self(id)),
                    _ => Err(ModelError(format!("Invalid {} id '{}'", $entity, s))),
                }
            }
        }
    };
}

entity_id!(DriverId, "driver");
entity_id!(TourId, "tour");

/// Returns true if `a` and `b` name the same location, ignoring case.
pub(crate) fn same_location(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A driver as known to the service.
#[derive(Clone, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct Driver {
    /// Identifier assigned by storage.
    id: DriverId,

    /// Full name of the driver.
    name: String,

    /// Home location of the driver, which never contains digits.
    location: String,
}

impl Driver {
    /// Replaces the fields of this driver that are present in `update`.
    pub(crate) fn apply(self, update: DriverUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.unwrap_or(self.name),
            location: update.location.unwrap_or(self.location),
        }
    }
}

/// Contents of a driver that does not exist yet.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NewDriver {
    /// Full name of the driver.
    name: String,

    /// Home location of the driver.
    location: String,
}

impl NewDriver {
    /// Creates a new driver after validating the untrusted `name` and `location`.
    pub(crate) fn new<N: Into<String>, L: Into<String>>(name: N, location: L) -> ModelResult<Self> {
        Ok(Self {
            name: require_non_empty("Name", name.into())?,
            location: require_driver_location(location.into())?,
        })
    }

    /// Turns this into a stored driver with the identifier `id`.
    pub(crate) fn into_driver(self, id: DriverId) -> Driver {
        Driver { id, name: self.name, location: self.location }
    }
}

/// Partial modification of a driver.  Absent fields keep their current values.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DriverUpdate {
    /// New name for the driver.
    name: Option<String>,

    /// New home location for the driver.
    location: Option<String>,
}

impl DriverUpdate {
    /// Creates a new update after validating the untrusted fields that are present.
    pub(crate) fn new(name: Option<String>, location: Option<String>) -> ModelResult<Self> {
        Ok(Self {
            name: name.map(|name| require_non_empty("Name", name)).transpose()?,
            location: location.map(require_driver_location).transpose()?,
        })
    }
}

/// A tour as known to the service.
#[derive(Clone, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tour {
    /// Identifier assigned by storage.
    id: TourId,

    /// Name of the customer that ordered the shipment.
    customer_name: String,

    /// Day on which the shipment leaves.
    shipment_date: ShipmentDate,

    /// Origin of the tour.  Assigned drivers must be based here.
    location_from: String,

    /// Destination of the tour.
    location_to: String,

    /// Driver assigned to the tour, if any.  Storage does not check that the driver exists.
    driver_id: Option<DriverId>,
}

impl Tour {
    /// Replaces the fields of this tour that are present in `update`.
    pub(crate) fn apply(self, update: TourUpdate) -> Self {
        let driver_id = match update.driver {
            Assignment::Keep => self.driver_id,
            Assignment::Unassign => None,
            Assignment::Assign(id) => Some(id),
        };
        Self {
            id: self.id,
            customer_name: update.customer_name.unwrap_or(self.customer_name),
            shipment_date: update.shipment_date.unwrap_or(self.shipment_date),
            location_from: update.location_from.unwrap_or(self.location_from),
            location_to: update.location_to.unwrap_or(self.location_to),
            driver_id,
        }
    }
}

/// Contents of a tour that does not exist yet.
#[derive(Clone, Debug, Getters, PartialEq)]
pub(crate) struct NewTour {
    /// Name of the customer that ordered the shipment.
    customer_name: String,

    /// Day on which the shipment leaves.
    shipment_date: ShipmentDate,

    /// Origin of the tour.
    location_from: String,

    /// Destination of the tour.
    location_to: String,

    /// Driver to assign to the tour, if any.
    driver_id: Option<DriverId>,
}

impl NewTour {
    /// Creates a new tour after validating the untrusted string fields.
    pub(crate) fn new<C, F, T>(
        customer_name: C,
        shipment_date: ShipmentDate,
        location_from: F,
        location_to: T,
        driver_id: Option<DriverId>,
    ) -> ModelResult<Self>
    where
        C: Into<String>,
        F: Into<String>,
        T: Into<String>,
    {
        Ok(Self {
            customer_name: require_non_empty("Customer name", customer_name.into())?,
            shipment_date,
            location_from: require_non_empty("Origin location", location_from.into())?,
            location_to: require_non_empty("Destination location", location_to.into())?,
            driver_id,
        })
    }

    /// Turns this into a stored tour with the identifier `id`.
    pub(crate) fn into_tour(self, id: TourId) -> Tour {
        Tour {
            id,
            customer_name: self.customer_name,
            shipment_date: self.shipment_date,
            location_from: self.location_from,
            location_to: self.location_to,
            driver_id: self.driver_id,
        }
    }
}

/// Requested change to the driver of a tour.
///
/// When deserialized from a request field, `null` means `Unassign` and a number means `Assign`.
/// Fields of this type should be marked `#[serde(default)]` so that a missing key means `Keep`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Assignment {
    /// Leave the current driver, if any, in place.
    #[default]
    Keep,

    /// Remove the current driver, if any.
    Unassign,

    /// Assign the given driver, replacing the current one.
    Assign(DriverId),
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<DriverId>::deserialize(deserializer)? {
            None => Ok(Assignment::Unassign),
            Some(id) => Ok(Assignment::Assign(id)),
        }
    }
}

/// Partial modification of a tour.  Absent fields keep their current values.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub(crate) struct TourUpdate {
    /// New customer name.
    customer_name: Option<String>,

    /// New shipment day.
    shipment_date: Option<ShipmentDate>,

    /// New origin of the tour.
    location_from: Option<String>,

    /// New destination of the tour.
    location_to: Option<String>,

    /// Change to the assigned driver.
    driver: Assignment,
}

impl TourUpdate {
    /// Creates a new update after validating the untrusted string fields that are present.
    pub(crate) fn new(
        customer_name: Option<String>,
        shipment_date: Option<ShipmentDate>,
        location_from: Option<String>,
        location_to: Option<String>,
        driver: Assignment,
    ) -> ModelResult<Self> {
        Ok(Self {
            customer_name: customer_name
                .map(|s| require_non_empty("Customer name", s))
                .transpose()?,
            shipment_date,
            location_from: location_from
                .map(|s| require_non_empty("Origin location", s))
                .transpose()?,
            location_to: location_to
                .map(|s| require_non_empty("Destination location", s))
                .transpose()?,
            driver,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_tokens};

    #[test]
    fn test_entity_id_from_str() {
        assert_eq!(DriverId::new(1), "1".parse::<DriverId>().unwrap());
        assert_eq!(TourId::new(4294967295), "4294967295".parse::<TourId>().unwrap());

        for raw in ["0", "-1", "abc", "", "1.5", "4294967296"] {
            assert_eq!(
                ModelError(format!("Invalid tour id '{}'", raw)),
                raw.parse::<TourId>().unwrap_err()
            );
        }
    }

    #[test]
    fn test_entity_id_ser_de() {
        assert_tokens(&DriverId::new(7), &[Token::U32(7)]);
        assert_eq!("7", DriverId::new(7).to_string());
    }

    #[test]
    fn test_same_location() {
        assert!(same_location("Berlin", "Berlin"));
        assert!(same_location("berlin", "BERLIN"));
        assert!(same_location("münchen", "MÜNCHEN"));

        assert!(!same_location("Berlin", "Hamburg"));
        assert!(!same_location("Berlin", "Berlin "));
    }

    #[test]
    fn test_new_driver_ok() {
        let driver = NewDriver::new("Anna", "Berlin").unwrap().into_driver(DriverId::new(3));
        assert_eq!(DriverId::new(3), *driver.id());
        assert_eq!("Anna", driver.name());
        assert_eq!("Berlin", driver.location());
    }

    #[test]
    fn test_new_driver_errors() {
        assert_eq!(
            ModelError("Name cannot be empty".to_owned()),
            NewDriver::new("  ", "Berlin").unwrap_err()
        );
        assert_eq!(
            ModelError("Location cannot be empty".to_owned()),
            NewDriver::new("Bob", "").unwrap_err()
        );
        assert_eq!(
            ModelError("Location cannot contain numbers".to_owned()),
            NewDriver::new("Bob", "Berlin5").unwrap_err()
        );
    }

    #[test]
    fn test_driver_apply_partial() {
        let driver = NewDriver::new("Anna", "Berlin").unwrap().into_driver(DriverId::new(1));

        let driver = driver.apply(DriverUpdate::new(None, Some("Hamburg".to_owned())).unwrap());
        assert_eq!("Anna", driver.name());
        assert_eq!("Hamburg", driver.location());

        let driver = driver.apply(DriverUpdate::new(Some("Anne".to_owned()), None).unwrap());
        assert_eq!("Anne", driver.name());
        assert_eq!("Hamburg", driver.location());

        let driver = driver.apply(DriverUpdate::default());
        assert_eq!(DriverId::new(1), *driver.id());
        assert_eq!("Anne", driver.name());
        assert_eq!("Hamburg", driver.location());
    }

    #[test]
    fn test_driver_update_errors() {
        assert_eq!(
            ModelError("Location cannot contain numbers".to_owned()),
            DriverUpdate::new(None, Some("Hamburg 2".to_owned())).unwrap_err()
        );
        assert_eq!(
            ModelError("Name cannot be empty".to_owned()),
            DriverUpdate::new(Some("".to_owned()), None).unwrap_err()
        );
    }

    #[test]
    fn test_new_tour_errors() {
        let date = ShipmentDate::from("2025-06-01");
        assert_eq!(
            ModelError("Customer name cannot be empty".to_owned()),
            NewTour::new("", date, "Berlin", "Hamburg", None).unwrap_err()
        );
        assert_eq!(
            ModelError("Origin location cannot be empty".to_owned()),
            NewTour::new("X", date, " ", "Hamburg", None).unwrap_err()
        );
        assert_eq!(
            ModelError("Destination location cannot be empty".to_owned()),
            NewTour::new("X", date, "Berlin", "", None).unwrap_err()
        );
    }

    #[test]
    fn test_new_tour_allows_digits_in_locations() {
        let tour = NewTour::new("X", ShipmentDate::from("2025-06-01"), "Dock 9", "Gate 12", None)
            .unwrap()
            .into_tour(TourId::new(1));
        assert_eq!("Dock 9", tour.location_from());
        assert_eq!("Gate 12", tour.location_to());
    }

    #[test]
    fn test_tour_apply_assignment() {
        let tour =
            NewTour::new("X", ShipmentDate::from("2025-06-01"), "Berlin", "Hamburg", None)
                .unwrap()
                .into_tour(TourId::new(1));

        let assign = |driver| TourUpdate::new(None, None, None, None, driver).unwrap();

        let tour = tour.apply(assign(Assignment::Assign(DriverId::new(2))));
        assert_eq!(Some(DriverId::new(2)), *tour.driver_id());

        let tour = tour.apply(assign(Assignment::Keep));
        assert_eq!(Some(DriverId::new(2)), *tour.driver_id());

        let tour = tour.apply(assign(Assignment::Unassign));
        assert_eq!(None, *tour.driver_id());
    }

    #[test]
    fn test_tour_apply_fields() {
        let tour =
            NewTour::new("X", ShipmentDate::from("2025-06-01"), "Berlin", "Hamburg", None)
                .unwrap()
                .into_tour(TourId::new(5));

        let update = TourUpdate::new(
            Some("Y".to_owned()),
            Some(ShipmentDate::from("2025-07-01")),
            None,
            Some("Munich".to_owned()),
            Assignment::Keep,
        )
        .unwrap();
        let tour = tour.apply(update);
        assert_eq!(TourId::new(5), *tour.id());
        assert_eq!("Y", tour.customer_name());
        assert_eq!(ShipmentDate::from("2025-07-01"), *tour.shipment_date());
        assert_eq!("Berlin", tour.location_from());
        assert_eq!("Munich", tour.location_to());
    }

    #[test]
    fn test_tour_update_errors() {
        assert_eq!(
            ModelError("Customer name cannot be empty".to_owned()),
            TourUpdate::new(Some("".to_owned()), None, None, None, Assignment::Keep).unwrap_err()
        );
        assert_eq!(
            ModelError("Origin location cannot be empty".to_owned()),
            TourUpdate::new(None, None, Some(" ".to_owned()), None, Assignment::Keep).unwrap_err()
        );
    }

    #[test]
    fn test_tour_serializes_camel_case_with_null_driver() {
        let tour =
            NewTour::new("X", ShipmentDate::from("2025-06-01"), "Berlin", "Hamburg", None)
                .unwrap()
                .into_tour(TourId::new(1));
        assert_eq!(
            serde_json::json!({
                "id": 1,
                "customerName": "X",
                "shipmentDate": "2025-06-01",
                "locationFrom": "Berlin",
                "locationTo": "Hamburg",
                "driverId": null,
            }),
            serde_json::to_value(&tour).unwrap()
        );
    }

    /// Request-like payload used to exercise the deserialization of `Assignment`.
    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct AssignmentRequest {
        /// Field under test.
        #[serde(default)]
        driver_id: Assignment,
    }

    #[test]
    fn test_assignment_field_presence() {
        let parse = |s| serde_json::from_str::<AssignmentRequest>(s).unwrap().driver_id;
        assert_eq!(Assignment::Keep, parse("{}"));
        assert_eq!(Assignment::Unassign, parse(r#"{"driverId": null}"#));
        assert_eq!(Assignment::Assign(DriverId::new(3)), parse(r#"{"driverId": 3}"#));
    }
}

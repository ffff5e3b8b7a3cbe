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

//! The `ShipmentDate` data type.

use dispatch_core::model::{ModelError, ModelResult};
use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Canonical format of a shipment date, used both to render dates and as the preferred input.
const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The calendar day on which a tour ships, without a time component.
///
/// Dates are always rendered as `YYYY-MM-DD` but can be parsed from a few other formats that
/// clients commonly send: full RFC 3339 timestamps (which are reduced to their UTC day) and the
/// `DD.MM.YYYY` display format.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct ShipmentDate(Date);

impl ShipmentDate {
    /// Creates a shipment date from an already-valid `date`.
    pub(crate) fn new(date: Date) -> Self {
        Self(date)
    }

    /// Parses an untrusted string `s` into a shipment date.
    pub(crate) fn parse(s: &str) -> ModelResult<Self> {
        let s = s.trim();

        if let Ok(date) = Date::parse(s, ISO_DATE) {
            return Ok(Self(date));
        }
        if let Ok(timestamp) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self(timestamp.to_offset(UtcOffset::UTC).date()));
        }
        if let Ok(date) = Date::parse(s, format_description!("[day].[month].[year]")) {
            return Ok(Self(date));
        }

        Err(ModelError(format!("Invalid shipment date '{}'", s)))
    }
}

#[cfg(test)]
impl From<&'static str> for ShipmentDate {
    /// Creates a new date from a hardcoded string, which must be valid.
    fn from(s: &'static str) -> Self {
        ShipmentDate::parse(s).expect("Hardcoded dates must be valid")
    }
}

impl fmt::Display for ShipmentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(ISO_DATE).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for ShipmentDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A deserialization visitor for a `ShipmentDate`.
struct ShipmentDateVisitor;

impl Visitor<'_> for ShipmentDateVisitor {
    type Value = ShipmentDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a date string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        ShipmentDate::parse(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for ShipmentDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(ShipmentDateVisitor)
    }
}

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

//! Business logic for the service.

use crate::db::Store;
use dispatch_core::db::DbError;
use dispatch_core::driver::DriverError;
use std::sync::Arc;

mod assignment;
mod drivers;
#[cfg(test)]
pub(crate) mod testutils;
mod tours;

/// Business logic.
///
/// The public operations exposed by the dispatcher are all "one shot" and consume the dispatcher
/// in an attempt to minimize the possibility of executing two operations on the same instance.
/// Cloning is cheap and callers should clone once per request.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    /// The storage that the dispatcher coordinates.
    store: Arc<dyn Store>,
}

impl Dispatcher {
    /// Creates a new dispatcher backed by the given injected components.
    pub(crate) fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Converts a storage error into a business error, naming the missing driver if applicable.
fn driver_not_found(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound("Driver not found".to_owned()),
        e => e.into(),
    }
}

/// Converts a storage error into a business error, naming the missing tour if applicable.
fn tour_not_found(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound("Tour not found".to_owned()),
        e => e.into(),
    }
}

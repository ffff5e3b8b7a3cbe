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

//! Collection of clock implementations.

use time::{Date, OffsetDateTime};

/// Generic definition of a clock.
pub trait Clock {
    /// Returns the current UTC time.
    fn now_utc(&self) -> OffsetDateTime;

    /// Returns the current calendar date in UTC.
    fn today_utc(&self) -> Date {
        self.now_utc().date()
    }
}

/// Clock implementation that uses the system clock.
#[derive(Clone, Default)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Test utilities.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    use super::*;

    /// A clock that always returns a preconfigured instant.
    pub struct FixedClock {
        /// Instant returned by `now_utc`.
        now: OffsetDateTime,
    }

    impl FixedClock {
        /// Creates a new clock that returns `now`.
        pub fn new(now: OffsetDateTime) -> Self {
            Self { now }
        }
    }

    impl Clock for FixedClock {
        fn now_utc(&self) -> OffsetDateTime {
            self.now
        }
    }

}

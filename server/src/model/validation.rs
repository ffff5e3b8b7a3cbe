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

//! Validation rules for user-supplied strings.

use dispatch_core::model::{ModelError, ModelResult};

/// Returns false iff `s` contains any decimal digit.
///
/// The empty string passes this check; use `is_non_empty` to reject it.
pub(crate) fn is_valid_location(s: &str) -> bool {
    !s.chars().any(|ch| ch.is_ascii_digit())
}

/// Returns false iff `s` is empty once leading and trailing whitespace is removed.
pub(crate) fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Ensures that the value `s` of the field `what` is not blank.
pub(super) fn require_non_empty(what: &str, s: String) -> ModelResult<String> {
    if !is_non_empty(&s) {
        return Err(ModelError(format!("{} cannot be empty", what)));
    }
    Ok(s)
}

/// Ensures that `s` is usable as the home location of a driver.
pub(super) fn require_driver_location(s: String) -> ModelResult<String> {
    let s = require_non_empty("Location", s)?;
    if !is_valid_location(&s) {
        return Err(ModelError("Location cannot contain numbers".to_owned()));
    }
    Ok(s)
}

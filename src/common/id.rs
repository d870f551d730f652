// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Identifier generation
//!
//! Derive a stable, URL friendly identifier from a human readable name.
use itertools::Itertools;

/// Generate the identifier for the given name.
///
/// Whitespace runs become a single `-`, characters other than ASCII
/// alphanumerics, `_` and `-` are dropped, repeated dashes collapse and the
/// result is lowercased. The same name always yields the same identifier.
pub fn generate_id<S: AsRef<str>>(name: S) -> String {
    name.as_ref()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .join("-")
        .split('-')
        .filter(|part| !part.is_empty())
        .join("-")
        .to_lowercase()
}

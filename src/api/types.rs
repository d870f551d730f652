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
//! Management API common types
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Navigation links of the paginated collection.
///
/// Every link is the path of the collection with the query of the original
/// request where the `page` (and `size` when it was requested) points to the
/// respective page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct PaginationLinks {
    /// Current page.
    #[serde(rename = "self")]
    pub self_link: String,

    /// First page.
    pub first: String,

    /// Previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// Next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Last page.
    pub last: String,
}

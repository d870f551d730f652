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
//! # Display order maintenance
//!
//! Moving an identity provider to a new position shifts the providers between
//! its old and new position by one so that the ordered providers of a
//! reference scope keep a contiguous run of order values starting at 1.
use std::cmp::Ordering;

use crate::identity_provider::error::IdentityProviderError;
use crate::identity_provider::types::IdentityProvider;

/// Position of the walk relative to the moved provider.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Walk {
    BeforeTarget,
    AfterTarget,
}

/// New order of a sibling given its old order, the requested order of the
/// moved provider and the position of the walk.
///
/// Returns `None` when the shifted order does not fit into `i32`.
fn shifted_order(old: i32, requested: i32, walk: Walk) -> Option<i32> {
    match (old.cmp(&requested), walk) {
        (Ordering::Less, Walk::BeforeTarget) => Some(old),
        (Ordering::Less, Walk::AfterTarget) => old.checked_sub(1),
        (Ordering::Greater, Walk::BeforeTarget) => old.checked_add(1),
        (Ordering::Greater, Walk::AfterTarget) => Some(old),
        (Ordering::Equal, Walk::BeforeTarget) => old.checked_add(1),
        (Ordering::Equal, Walk::AfterTarget) => old.checked_sub(1),
    }
}

/// Compute the new order of the siblings after `target` moved to
/// `target.order`.
///
/// Siblings with an order below 1 are not part of the ordering and are
/// dropped. The remaining ones are returned sorted by their previous order
/// with the recomputed order applied, the moved provider included when it
/// was part of the ordering before.
pub fn reorder(
    siblings: Vec<IdentityProvider>,
    target: &IdentityProvider,
) -> Result<Vec<IdentityProvider>, IdentityProviderError> {
    let mut ordered: Vec<IdentityProvider> =
        siblings.into_iter().filter(|idp| idp.order > 0).collect();
    ordered.sort_by_key(|idp| idp.order);

    let capacity = ordered.len();
    let (_, reordered) = ordered.into_iter().try_fold(
        (Walk::BeforeTarget, Vec::with_capacity(capacity)),
        |(walk, mut acc), mut idp| {
            let walk = if idp.id == target.id {
                idp.order = target.order;
                Walk::AfterTarget
            } else {
                idp.order = shifted_order(idp.order, target.order, walk)
                    .ok_or_else(|| IdentityProviderError::OrderOutOfRange(idp.id.clone()))?;
                walk
            };
            acc.push(idp);
            Ok::<_, IdentityProviderError>((walk, acc))
        },
    )?;
    Ok(reordered)
}

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
//! # Common API helpers
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use itertools::Itertools;
use std::collections::HashMap;

use crate::api::error::ManagementApiError;
use crate::api::types::PaginationLinks;
use crate::common::types::ExecutionContext;

/// Query parameter carrying the requested page number.
pub const PAGE_QUERY_PARAM: &str = "page";
/// Query parameter carrying the requested page size.
pub const SIZE_QUERY_PARAM: &str = "size";
/// Path parameter carrying the environment id.
pub const ENVIRONMENT_PATH_PARAM: &str = "env_id";

impl<S> FromRequestParts<S> for ExecutionContext
where
    S: Send + Sync,
{
    type Rejection = ManagementApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state).await?;
        params
            .get(ENVIRONMENT_PATH_PARAM)
            .map(ExecutionContext::new)
            .ok_or_else(|| ManagementApiError::BadRequest("environment is missing".into()))
    }
}

/// Parse the raw query string into the ordered list of parameters. The first
/// occurrence of a repeated key wins.
fn query_params(query: Option<&str>) -> Result<Vec<(String, String)>, ManagementApiError> {
    let params: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
        .map_err(|err| ManagementApiError::BadRequest(format!("invalid query string: {err}")))?;
    Ok(params.into_iter().unique_by(|(key, _)| key.clone()).collect())
}

fn render_link(path: &str, params: &[(String, String)]) -> Result<String, ManagementApiError> {
    if params.is_empty() {
        return Ok(path.to_string());
    }
    Ok(format!("{path}?{}", serde_urlencoded::to_string(params)?))
}

/// Prepare the navigation links of the paginated resource collection.
///
/// No links are returned when the collection is empty, the requested page
/// does not exist or all the items fit into a single page.
///
/// # Arguments
/// * `path` - The absolute path of the collection.
/// * `query` - The raw query string of the original request.
/// * `page` - The requested page (1 based).
/// * `size` - The page size in effect.
/// * `total` - The number of items in the collection.
pub fn build_pagination_links(
    path: &str,
    query: Option<&str>,
    page: u64,
    size: u64,
    total: u64,
) -> Result<Option<PaginationLinks>, ManagementApiError> {
    if total == 0 || size == 0 {
        return Ok(None);
    }
    let total_pages = total.div_ceil(size).max(1);
    if page < 1 || page > total_pages || total_pages == 1 {
        return Ok(None);
    }

    let params = query_params(query)?;
    let size_requested = params.iter().any(|(key, _)| key == SIZE_QUERY_PARAM);
    let link = |target: u64| {
        let mut link_params = vec![(PAGE_QUERY_PARAM.to_string(), target.to_string())];
        if size_requested {
            link_params.push((SIZE_QUERY_PARAM.to_string(), size.to_string()));
        }
        link_params.extend(
            params
                .iter()
                .filter(|(key, _)| key != PAGE_QUERY_PARAM && key != SIZE_QUERY_PARAM)
                .cloned(),
        );
        render_link(path, &link_params)
    };

    Ok(Some(PaginationLinks {
        self_link: render_link(path, &params)?,
        first: link(1)?,
        prev: if page > 1 { Some(link(page - 1)?) } else { None },
        next: if page < total_pages {
            Some(link(page + 1)?)
        } else {
            None
        },
        last: link(total_pages)?,
    }))
}

/// Select the items of the requested page.
pub fn paginate<T>(items: Vec<T>, page: u64, size: u64) -> Vec<T> {
    let skip = usize::try_from(page.saturating_sub(1).saturating_mul(size)).unwrap_or(usize::MAX);
    let take = usize::try_from(size).unwrap_or(usize::MAX);
    items.into_iter().skip(skip).take(take).collect()
}

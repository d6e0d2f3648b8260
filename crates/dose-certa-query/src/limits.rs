// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::query_error::{QueryError, QueryErrorCode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryLimits {
    pub max_search_len: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_search_len: 128,
        }
    }
}

impl QueryLimits {
    pub fn check_search(&self, term: &str) -> Result<(), QueryError> {
        let len = term.chars().count();
        if len > self.max_search_len {
            return Err(QueryError::new(
                QueryErrorCode::Limit,
                format!(
                    "search term has {len} characters; the limit is {}",
                    self.max_search_len
                ),
            ));
        }
        Ok(())
    }
}

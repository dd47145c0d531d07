use crate::core::RelverResult;
use crate::di::ReleaseCatalog;
use crate::github::types::{Release, Repository};
use tracing::debug;

/// Lazy, newest-first walk over a repository's releases.
///
/// Each call to [`ReleasePager::next_page`] issues at most one request, so a
/// consumer that finds what it needs early never fetches the remaining pages.
pub struct ReleasePager<'a> {
    catalog: &'a dyn ReleaseCatalog,
    repository: &'a Repository,
    next: Option<u32>,
}

impl<'a> ReleasePager<'a> {
    pub fn new(catalog: &'a dyn ReleaseCatalog, repository: &'a Repository) -> Self {
        Self {
            catalog,
            repository,
            next: Some(1),
        }
    }

    /// Fetch the next page, or `None` once the list is exhausted
    pub async fn next_page(&mut self) -> RelverResult<Option<Vec<Release>>> {
        let Some(page) = self.next else {
            return Ok(None);
        };

        debug!(repository = %self.repository, page, "Fetching release page");
        let result = self
            .catalog
            .list_releases_page(self.repository, page)
            .await?;

        self.next = if result.has_next && !result.releases.is_empty() {
            Some(page + 1)
        } else {
            None
        };

        if result.releases.is_empty() {
            return Ok(None);
        }
        Ok(Some(result.releases))
    }
}

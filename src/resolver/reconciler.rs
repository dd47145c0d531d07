use super::version_resolver::ResolvedVersion;
use crate::core::version::normalize;
use crate::core::RelverResult;
use crate::di::ReleaseCatalog;
use crate::github::types::{Release, Repository};
use tracing::{debug, warn};

/// Commit SHA a tag points at, following one annotated tag object if needed
pub async fn resolve_tag_commit(
    catalog: &dyn ReleaseCatalog,
    repo: &Repository,
    tag: &str,
) -> RelverResult<String> {
    let object = catalog.tag_ref(repo, tag).await?;
    if object.is_annotated_tag() {
        let target = catalog.tag_object(repo, &object.sha).await?;
        return Ok(target.sha);
    }
    Ok(object.sha)
}

/// Turn a selected release into a stable version handle
///
/// Semver tags are returned as-is. A floating tag (`stable`, `nightly`) is
/// matched by commit against the numbered releases on the first page of the
/// catalog only; when none matches, the raw commit SHA is returned.
pub async fn reconcile(
    catalog: &dyn ReleaseCatalog,
    repo: &Repository,
    release: &Release,
) -> RelverResult<ResolvedVersion> {
    if normalize(&release.tag_name).is_some() {
        return Ok(ResolvedVersion::new(release.tag_name.clone()));
    }

    let target = resolve_tag_commit(catalog, repo, &release.tag_name).await?;
    debug!(tag = %release.tag_name, commit = %target, "Reconciling floating tag");

    let first_page = catalog.list_releases_page(repo, 1).await?;
    for candidate in first_page.releases {
        if normalize(&candidate.tag_name).is_none() {
            continue;
        }
        let commit = resolve_tag_commit(catalog, repo, &candidate.tag_name).await?;
        if commit == target {
            debug!(tag = %release.tag_name, alias = %candidate.tag_name, "Found numbered alias");
            return Ok(ResolvedVersion::new(candidate.tag_name));
        }
    }

    warn!(
        tag = %release.tag_name,
        commit = %target,
        "No numbered release on the first page shares this commit; using the commit SHA"
    );
    Ok(ResolvedVersion::new(target))
}

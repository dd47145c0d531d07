use relver::core::version::is_commit_sha;
use relver::core::RelverResult;
use relver::di::ServiceContainer;
use relver::installer::Tool;
use relver::resolver::Resolution;

pub async fn run(request: String, tool: Tool) -> RelverResult<()> {
    let container = ServiceContainer::new()?;
    let resolution = resolve_with(&container, &request, tool).await?;

    println!("{}", resolution.version);
    if resolution.release.tag_name != resolution.version.as_str() {
        println!("  release: {}", resolution.release.tag_name);
    }
    if is_commit_sha(resolution.version.as_str()) {
        println!("  no numbered release shares this commit");
    }

    Ok(())
}

pub async fn resolve_with(
    container: &ServiceContainer,
    request: &str,
    tool: Tool,
) -> RelverResult<Resolution> {
    let mut resolver = container.resolver(tool.repository());
    resolver.resolve(request).await
}

use crate::build;

/// Returns the long version string with build information
pub fn long_version() -> String {
    let version = build::PKG_VERSION;
    let git_sha = build::SHORT_COMMIT;
    #[allow(clippy::const_is_empty)]
    let git_branch = {
        let branch = build::BRANCH;
        if branch.is_empty() {
            option_env!("GITHUB_REF_NAME").unwrap_or("unknown")
        } else {
            branch
        }
    };
    let git_state = if build::GIT_CLEAN { "clean" } else { "dirty" };
    let commit_msg = option_env!("GIT_COMMIT_MESSAGE").unwrap_or("no commit message");

    format!(
        "{version} ({git_branch} {git_sha} {git_state}: {commit_msg})
Build: {} for {} ({})
Rustc: {}",
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::BUILD_OS,
        build::RUST_VERSION,
    )
}

//! Platform environment detection.

/// Environment variables set by common CI providers.
const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the plain, non-interactive UI.
pub fn is_ci() -> bool {
    detect_ci(|name| std::env::var_os(name).is_some())
}

/// CI detection over an arbitrary variable lookup.
fn detect_ci(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}

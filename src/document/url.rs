//! Documentation links for policies.
//!
//! Links are either `<base>/<policy path>` for hosted policies or the policy's
//! directory relative to the output directory. Relative links always use
//! forward slashes, since markdown paths do regardless of host conventions.
use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Failure to compute a relative documentation link.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    #[error("get abs path of {path}: {source}")]
    CurrentDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no relative path from {base} to {target}")]
    NoRelativePath { base: PathBuf, target: PathBuf },
}

/// Compute the link for a policy located at `policy_path`.
pub fn resolve_url(
    policy_path: &str,
    output_dir: &Path,
    base_url: Option<&str>,
) -> Result<String, PathResolutionError> {
    if let Some(base_url) = base_url {
        return Ok(format!("{base_url}/{policy_path}"));
    }

    let output_dir = absolute(output_dir)?;
    let policy_file = absolute(Path::new(policy_path))?;
    let policy_dir = match policy_file.parent() {
        Some(parent) => parent.to_path_buf(),
        None => policy_file.clone(),
    };
    let relative = relative_path(&output_dir, &policy_dir).ok_or_else(|| {
        PathResolutionError::NoRelativePath {
            base: output_dir.clone(),
            target: policy_dir.clone(),
        }
    })?;
    Ok(to_forward_slashes(&relative))
}

/// Make `path` absolute against the working directory and fold `.`/`..`.
fn absolute(path: &Path) -> Result<PathBuf, PathResolutionError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|source| PathResolutionError::CurrentDir {
            path: path.to_path_buf(),
            source,
        })?;
        cwd.join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Lexical relative path from `base` to `target`; both must be normalized and
/// absolute. `None` when they live under different roots (e.g. drives).
fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();
    if base.first() != target.first() {
        return None;
    }
    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_path_as_given() {
        let url = resolve_url(
            "policies/./labels/src.rego",
            Path::new("/out"),
            Some("https://github.com/org/repo"),
        )
        .expect("resolve");
        assert_eq!(url, "https://github.com/org/repo/policies/./labels/src.rego");
    }

    #[cfg(unix)]
    #[test]
    fn relative_link_is_policy_directory() {
        let url = resolve_url("/out/sub/policy.rego", Path::new("/out"), None).expect("resolve");
        assert_eq!(url, "sub");
    }

    #[cfg(unix)]
    #[test]
    fn relative_link_walks_up_from_output() {
        let url = resolve_url(
            "/repo/policies/labels/src.rego",
            Path::new("/repo/docs"),
            None,
        )
        .expect("resolve");
        assert_eq!(url, "../policies/labels");
    }

    #[cfg(unix)]
    #[test]
    fn policy_beside_output_links_to_current_directory() {
        let url = resolve_url("/out/policy.rego", Path::new("/out/"), None).expect("resolve");
        assert_eq!(url, ".");
    }

    #[test]
    fn relative_inputs_resolve_against_working_directory() {
        let url = resolve_url("policies/labels/src.rego", Path::new("."), None).expect("resolve");
        assert_eq!(url, "policies/labels");

        let url = resolve_url("policies/labels/src.rego", Path::new("docs"), None).expect("resolve");
        assert_eq!(url, "../policies/labels");
    }

    #[cfg(unix)]
    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}

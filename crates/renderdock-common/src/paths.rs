//! Path utilities for resolving asset paths reported by the host.
//!
//! The host stores asset paths either absolute or relative to the scene file,
//! using a leading `//` to mark the latter. Everything sent to the intake
//! service must be absolute.

use std::path::{Path, PathBuf};

/// Prefix the host uses for paths relative to the scene file's directory.
pub const HOST_RELATIVE_PREFIX: &str = "//";

/// Check if a host path is relative to the scene file.
///
/// # Examples
///
/// ```
/// use renderdock_common::paths::is_host_relative;
///
/// assert!(is_host_relative("//textures/wood.png"));
/// assert!(!is_host_relative("/srv/textures/wood.png"));
/// ```
pub fn is_host_relative(raw: &str) -> bool {
    raw.starts_with(HOST_RELATIVE_PREFIX)
}

/// Resolve a host path to an absolute path.
///
/// `base_dir` is the directory of the saved scene file. Returns `None` for an
/// empty path, and for a `//`-relative path when the scene has no directory
/// to resolve against (it was never saved). Plain relative paths resolve
/// against the current working directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use renderdock_common::paths::resolve_host_path;
///
/// let base = Path::new("/projects/wall");
/// assert_eq!(
///     resolve_host_path("//textures/brick.png", Some(base)).unwrap(),
///     Path::new("/projects/wall/textures/brick.png")
/// );
/// assert_eq!(
///     resolve_host_path("/srv/hdri/sky.hdr", Some(base)).unwrap(),
///     Path::new("/srv/hdri/sky.hdr")
/// );
/// assert!(resolve_host_path("", Some(base)).is_none());
/// assert!(resolve_host_path("//textures/brick.png", None).is_none());
/// ```
pub fn resolve_host_path(raw: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(rest) = raw.strip_prefix(HOST_RELATIVE_PREFIX) {
        return base_dir.map(|dir| dir.join(rest));
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        std::path::absolute(path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_relative_detection() {
        assert!(is_host_relative("//a.png"));
        assert!(is_host_relative("//"));
        assert!(!is_host_relative("/a.png"));
        assert!(!is_host_relative("a.png"));
        assert!(!is_host_relative(""));
    }

    #[test]
    fn test_resolve_relative_to_scene() {
        let base = Path::new("/home/artist/blends/wall");
        assert_eq!(
            resolve_host_path("//textures/balcony_1k.hdr", Some(base)).unwrap(),
            PathBuf::from("/home/artist/blends/wall/textures/balcony_1k.hdr")
        );
    }

    #[test]
    fn test_resolve_absolute_untouched() {
        assert_eq!(
            resolve_host_path("/srv/a.png", None).unwrap(),
            PathBuf::from("/srv/a.png")
        );
    }

    #[test]
    fn test_resolve_plain_relative_uses_cwd() {
        let resolved = resolve_host_path("textures/a.png", None).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("textures/a.png"));
    }

    #[test]
    fn test_edge_cases() {
        // Empty and whitespace-only paths
        assert!(resolve_host_path("", None).is_none());
        assert!(resolve_host_path("   ", Some(Path::new("/x"))).is_none());

        // Scene-relative without a saved scene
        assert!(resolve_host_path("//a.png", None).is_none());
    }
}

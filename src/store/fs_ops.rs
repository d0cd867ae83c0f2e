//! Filesystem helpers shared by the text backend and erasure

use std::fs;
use std::io;
use std::path::Path;

/// Recursively delete `path`, repairing permissions on the way.
///
/// Any step that fails with `PermissionDenied` grants the owner access to the
/// failing path (and its parent directory) and is retried once. Other errors
/// propagate.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        let entries = retry_with_access(path, |p| fs::read_dir(p))?;
        for entry in entries {
            remove_tree(&entry?.path())?;
        }
        retry_with_access(path, |p| fs::remove_dir(p))
    } else {
        retry_with_access(path, |p| fs::remove_file(p))
    }
}

/// Delete a single file, or a whole tree when `path` is a directory
pub fn remove_path(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        remove_tree(path)
    } else {
        retry_with_access(path, |p| fs::remove_file(p))
    }
}

fn retry_with_access<T, F>(path: &Path, op: F) -> io::Result<T>
where
    F: Fn(&Path) -> io::Result<T>,
{
    match op(path) {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(path = %path.display(), "permission denied, granting owner access and retrying");
            grant_owner_access(path)?;
            if let Some(parent) = path.parent() {
                grant_owner_access(parent)?;
            }
            op(path)
        }
        other => other,
    }
}

#[cfg(unix)]
fn grant_owner_access(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    let wanted = if metadata.is_dir() { 0o700 } else { 0o200 };
    let mut perms = metadata.permissions();
    if perms.mode() & wanted != wanted {
        perms.set_mode(perms.mode() | wanted);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn grant_owner_access(path: &Path) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn make_readonly(path: &Path) {
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn test_remove_tree_with_readonly_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("ns");
        let nested = root.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("a"), "1").unwrap();
        fs::write(nested.join("b"), "2").unwrap();

        make_readonly(&root.join("a"));
        make_readonly(&nested.join("b"));
        make_readonly(&nested);

        remove_tree(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_remove_path_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ns.json");
        fs::write(&file, "{}").unwrap();
        make_readonly(&file);

        remove_path(&file).unwrap();
        assert!(!file.exists());
        assert!(temp_dir.path().exists());
    }

    // Permission bits are ignored for root, so the repair path is driven by an
    // operation that reports PermissionDenied on its first attempt.
    #[test]
    fn test_retry_grants_access_after_permission_denied() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("locked");
        fs::create_dir(&dir).unwrap();
        let file = dir.join("value");
        fs::write(&file, "1").unwrap();
        make_readonly(&file);
        make_readonly(&dir);

        let attempts = Cell::new(0);
        let result = retry_with_access(&file, |p| {
            attempts.set(attempts.get() + 1);
            if attempts.get() == 1 {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else {
                fs::remove_file(p)
            }
        });

        result.unwrap();
        assert_eq!(attempts.get(), 2);
        assert!(!file.exists());
        assert!(!fs::metadata(&dir).unwrap().permissions().readonly());
    }

    #[test]
    fn test_retry_gives_up_after_second_denial() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("value");
        fs::write(&file, "1").unwrap();
        make_readonly(&file);

        let attempts = Cell::new(0);
        let err = retry_with_access(&file, |_| -> io::Result<()> {
            attempts.set(attempts.get() + 1);
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(attempts.get(), 2);
        assert!(!fs::metadata(&file).unwrap().permissions().readonly());
    }

    #[test]
    fn test_retry_does_not_repeat_other_errors() {
        let temp_dir = TempDir::new().unwrap();
        let attempts = Cell::new(0);
        let err = retry_with_access(temp_dir.path(), |_| -> io::Result<()> {
            attempts.set(attempts.get() + 1);
            Err(io::Error::from(io::ErrorKind::NotFound))
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn test_remove_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = remove_tree(&temp_dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

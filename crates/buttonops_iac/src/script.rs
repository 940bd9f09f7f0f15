//! Shell script emission.

use std::fs;
use std::path::Path;

use crate::error::IacResult;

/// Write a script and mark it executable (0755 on unix).
pub fn write_executable(path: &Path, contents: &str) -> IacResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

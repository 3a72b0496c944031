use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// Timestamped copy of the target file (non-destructive)
pub fn backup_file(path: &Path) -> io::Result<PathBuf> {
    if !path.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a file"));
    }
    let parent = path.parent().unwrap_or(Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dest = parent.join(format!("{}_{}.json.bak", stem, ts));
    fs::copy(path, &dest)?;
    Ok(dest)
}

use crate::naming::has_dds_extension;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collects the `.dds` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Entries that cannot be read are
/// logged and skipped. Names that are not valid UTF-8 are still returned;
/// the batch reports them as skipped.
pub fn find_dds_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        let matches = has_dds_extension(&entry.file_name().to_string_lossy());
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn finds_only_direct_dds_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b_n.dds", b"x");
        write_file(dir.path(), "a_d.DDS", b"x");
        write_file(dir.path(), "readme.txt", b"x");
        write_file(dir.path(), "c.dds.bak", b"x");
        fs::create_dir(dir.path().join("nested.dds")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_file(&dir.path().join("sub"), "deep_d.dds", b"x");

        let names: Vec<String> = find_dds_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a_d.DDS", "b_n.dds"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"bad\xFF_d.dds");
        fs::write(dir.path().join(name), b"x").unwrap();

        let files = find_dds_files(dir.path()).unwrap();
        assert_eq!(files, [dir.path().join(name)]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_dds_files(&dir.path().join("missing")).is_err());
    }
}

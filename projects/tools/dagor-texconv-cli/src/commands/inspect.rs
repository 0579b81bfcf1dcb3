use crate::util::canonicalize_input_dir;
use argh::FromArgs;
use dagor_texconv_core::batch::find_dds_files;
use dagor_texconv_core::NamingConvention;
use dagor_texconv_dds::{parse_dds, DdsInfo};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// List the textures of a directory with their naming convention and DDS format
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// input directory path
    #[argh(option, from_str_fn(canonicalize_input_dir))]
    pub input: PathBuf,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), Box<dyn std::error::Error>> {
    let files = find_dds_files(&cmd.input)?;
    if files.is_empty() {
        println!("No .dds files found in {}.", cmd.input.display());
        return Ok(());
    }

    for path in &files {
        println!("{}", describe(path));
    }
    Ok(())
}

/// One line summary of a texture: name, convention and header details.
fn describe(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let convention = match NamingConvention::classify_path(path) {
        NamingConvention::AlbedoAO => "albedo/ao",
        NamingConvention::NormalRoughMetal => "normal/roughness/metal",
        NamingConvention::Unrecognized => "skipped",
    };

    match read_header(path) {
        Ok(Some(info)) => format!(
            "{name}: {convention}, {:?} {}x{} ({} mips)",
            info.format, info.width, info.height, info.mipmap_count
        ),
        Ok(None) => format!("{name}: {convention}, not a DDS file"),
        Err(e) => format!("{name}: {convention}, unreadable ({e})"),
    }
}

fn read_header(path: &Path) -> Result<Option<DdsInfo>, Box<dyn std::error::Error>> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Ok(None);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(parse_dds(mapping.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn rgba_header(width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; 0x80];
        data[0..4].copy_from_slice(b"DDS ");
        data[0x0C..0x10].copy_from_slice(&height.to_le_bytes());
        data[0x10..0x14].copy_from_slice(&width.to_le_bytes());
        data[0x50..0x54].copy_from_slice(&0x41u32.to_le_bytes());
        data[0x58..0x5C].copy_from_slice(&32u32.to_le_bytes());
        data[0x5C..0x60].copy_from_slice(&0x0000_00FFu32.to_le_bytes());
        data[0x60..0x64].copy_from_slice(&0x0000_FF00u32.to_le_bytes());
        data[0x64..0x68].copy_from_slice(&0x00FF_0000u32.to_le_bytes());
        data[0x68..0x6C].copy_from_slice(&0xFF00_0000u32.to_le_bytes());
        data
    }

    #[test]
    fn describes_header_and_convention() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall_d.dds");
        fs::write(&path, rgba_header(8, 4)).unwrap();

        assert_eq!(describe(&path), "wall_d.dds: albedo/ao, RGBA8888 8x4 (1 mips)");
    }

    #[test]
    fn describes_non_dds_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.dds");
        fs::write(&path, b"hello").unwrap();

        assert_eq!(describe(&path), "notes.dds: skipped, not a DDS file");
    }

    #[test]
    fn describes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rock_n.dds");
        fs::write(&path, b"").unwrap();

        assert_eq!(describe(&path), "rock_n.dds: normal/roughness/metal, not a DDS file");
    }
}

//! `.mcpack` packaging.

use crate::error::{ConverterError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Zip the contents of a Bedrock pack directory into `destination`.
///
/// Entry names are relative to `pack_dir` and always use `/`.
pub fn write_mcpack(pack_dir: &Path, destination: &Path) -> Result<PathBuf> {
    let mut files = Vec::new();
    collect_files(pack_dir, &mut files)?;
    files.sort();

    let file = std::fs::File::create(destination)?;
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let relative = path
            .strip_prefix(pack_dir)
            .map_err(|e| ConverterError::Export(format!("{}: {}", path.display(), e)))?
            .to_string_lossy()
            .replace('\\', "/");

        zip.start_file(relative, options)?;
        zip.write_all(&std::fs::read(&path)?)?;
    }

    zip.finish()?;
    tracing::info!("Created .mcpack file: {}", destination.display());
    Ok(destination.to_path_buf())
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mcpack() {
        let dir = tempfile::tempdir().unwrap();
        let pack_dir = dir.path().join("demo_bedrock");
        std::fs::create_dir_all(pack_dir.join("models/entity")).unwrap();
        std::fs::create_dir_all(pack_dir.join("texts")).unwrap();
        std::fs::write(pack_dir.join("manifest.json"), "{}").unwrap();
        std::fs::write(pack_dir.join("models/entity/a.geo.json"), "{}").unwrap();

        let destination = dir.path().join("demo_bedrock.mcpack");
        write_mcpack(&pack_dir, &destination).unwrap();

        let archive = zip::ZipArchive::new(std::fs::File::open(&destination).unwrap()).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["manifest.json", "models/entity/a.geo.json"]);
    }
}

use std::{
    fs,
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use tempfile::NamedTempFile;

use crate::{error::SweepError, image::Image, sweep_err, sweep_try};

/// Encodes the image as PNG and replaces the file at `path` with it.
///
/// The data goes to a temporary file next to the target first and is renamed
/// over it only once everything has been flushed, so an asset is either fully
/// rewritten or left as it was. Symlinks are written through to the file they
/// point at, and the replacement keeps the permissions of the file it replaces.
pub fn encode(image: &Image, path: &Path) -> Result<(), SweepError> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        // nothing there yet, or a dangling link: write to the path as given
        Err(error) if error.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(error) => {
            return Err(sweep_err!(
                "unable to resolve '{}': {error}",
                path.display()
            ))
        }
    };
    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = NamedTempFile::new_in(directory).map_err(|error| {
        sweep_err!(
            "unable to create temporary file in '{}': {error}",
            directory.display()
        )
    })?;

    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;

    // The buffers would be flushed on drop, but that does not report errors.
    let file = sweep_try!(writer.into_inner().map_err(|e| e.into_error()));
    if let Some(permissions) = permissions {
        sweep_try!(file.as_file().set_permissions(permissions));
    }
    sweep_try!(file.as_file().sync_all());
    file.persist(&target)
        .map_err(|error| sweep_err!("unable to write image '{}': {error}", path.display()))?;
    Ok(())
}

fn write_png<W: Write>(image: &Image, writer: &mut W) -> Result<(), SweepError> {
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    sweep_try!(image.pixels.write_with_encoder(encoder));
    Ok(())
}

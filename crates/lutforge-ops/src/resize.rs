//! LUT resolution change entry point.

use crate::{OpsResult, batch::load_as_3d};
use lutforge_lut::cube;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resamples a `.cube` file to a new resolution and writes the result.
///
/// The new grid samples the original via trilinear interpolation at its own
/// lattice coordinates. Downsampling loses detail irrecoverably;
/// upsampling only smooths between the original samples. Fails on
/// `new_size < 2`.
///
/// # Example
///
/// ```rust,ignore
/// use lutforge_ops::resize;
///
/// resize("look_65.cube".as_ref(), "look_17.cube".as_ref(), 17)?;
/// ```
pub fn resize(input: &Path, output: &Path, new_size: usize) -> OpsResult<PathBuf> {
    let lut = load_as_3d(input)?;
    info!(
        input = %input.display(),
        from = lut.size,
        to = new_size,
        "resampling LUT"
    );

    let resized = lut.resized(new_size)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    cube::write_3d(output, &resized)?;

    info!(path = %output.display(), "saved");
    Ok(output.to_path_buf())
}

//! Log-to-log LUT generation entry points.

use crate::OpsResult;
use lutforge_color::{AdaptationMethod, LogFormat, synthesize};
use lutforge_lut::cube;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Derived output filename: `{Source}_to_{Target}_{size}.cube`.
fn derived_filename(source: LogFormat, target: LogFormat, size: usize) -> String {
    format!("{}_to_{}_{}.cube", source.slug(), target.slug(), size)
}

/// Generates one log-to-log conversion LUT and writes it as `.cube`.
///
/// Format names are resolved case-insensitively against the registry;
/// unknown names fail before anything is allocated or written. When
/// `out_path` is `None` the filename is derived from the format slugs and
/// size, in the current directory.
///
/// A non-zero clipped ratio after synthesis is reported as a warning, not
/// an error: the written file is always sanitized to unit range.
///
/// # Example
///
/// ```rust,ignore
/// use lutforge_ops::generate;
/// use lutforge_color::AdaptationMethod;
///
/// let path = generate("LogC4", "F-Log2", 65, None, AdaptationMethod::Cat02)?;
/// ```
pub fn generate(
    source: &str,
    target: &str,
    size: usize,
    out_path: Option<&Path>,
    adaptation: AdaptationMethod,
) -> OpsResult<PathBuf> {
    let source = LogFormat::parse(source)?;
    let target = LogFormat::parse(target)?;

    let out = match out_path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(derived_filename(source, target, size)),
    };

    info!(
        source = source.full_name(),
        target = target.full_name(),
        size,
        out = %out.display(),
        "generating LUT"
    );

    let (lut, stats) = synthesize(source, target, size, adaptation)?;

    if stats.is_clipped() {
        warn!(
            clipped_pct = stats.clipped_ratio * 100.0,
            min = stats.min,
            max = stats.max,
            "out-of-range samples were clamped to [0, 1]"
        );
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    cube::write_3d(&out, &lut)?;

    info!(path = %out.display(), "saved");
    Ok(out)
}

/// Generates LUTs from one source format to many targets.
///
/// `targets = None` means every registry format except the source. All
/// names are validated up front (a misspelled target fails the whole call
/// before any generation starts); the degenerate source-to-source pair is
/// skipped. Per-target failures during generation are logged and skipped
/// so the remaining targets still complete.
///
/// Returns the paths actually written, in target order.
pub fn generate_many(
    source: &str,
    targets: Option<&[String]>,
    size: usize,
    out_dir: &Path,
    adaptation: AdaptationMethod,
) -> OpsResult<Vec<PathBuf>> {
    let source = LogFormat::parse(source)?;

    let targets: Vec<LogFormat> = match targets {
        Some(names) => names
            .iter()
            .map(|n| LogFormat::parse(n))
            .collect::<Result<_, _>>()?,
        None => LogFormat::ALL
            .iter()
            .copied()
            .filter(|&f| f != source)
            .collect(),
    };

    std::fs::create_dir_all(out_dir)?;

    info!(
        source = %source,
        targets = targets.len(),
        out_dir = %out_dir.display(),
        "batch generation"
    );

    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        if target == source {
            info!(format = %source, "skipping identity conversion");
            continue;
        }

        let out = out_dir.join(derived_filename(source, target, size));
        match generate(source.name(), target.name(), size, Some(&out), adaptation) {
            Ok(path) => written.push(path),
            Err(e) => {
                error!(source = %source, target = %target, error = %e, "generation failed");
            }
        }
    }

    info!(generated = written.len(), "batch generation complete");
    Ok(written)
}

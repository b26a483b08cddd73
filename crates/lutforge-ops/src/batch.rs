//! Batch LUT concatenation.
//!
//! Resolves a pair of inputs (file or directory on either side, never both
//! directories) into a worklist, runs every pair through compose + analyze +
//! write on a bounded worker pool, and reports one [`ResultRecord`] per
//! pair. A failing pair never aborts its siblings.

use crate::{OpsError, OpsResult, ResultRecord};
use lutforge_lut::{DEFAULT_GRID_SIZE, Lut3D, LutError, cube};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One resolved batch unit: two input files and the exact output file.
#[derive(Debug, Clone)]
struct WorkItem {
    first: PathBuf,
    second: PathBuf,
    output: PathBuf,
}

/// True if the path names a `.cube` file (by extension, case-insensitive).
fn is_cube_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("cube"))
}

/// File stem used for derived names, `"lut"` if the path has none.
fn stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("lut")
}

/// Loads a `.cube` file as a 3D LUT, promoting 1D curves.
///
/// A file holding a 1D LUT is expanded to an equivalent cube (per-channel
/// replication at the default grid size) so concatenation always operates
/// on two 3D tables, mirroring how channel-independent curves behave.
pub fn load_as_3d(path: &Path) -> OpsResult<Lut3D> {
    match cube::read_3d(path) {
        Ok(lut) => Ok(lut),
        Err(LutError::ParseError(first_err)) => {
            // Could be a 1D file; retry before giving up.
            match cube::read_1d(path) {
                Ok(curve) => {
                    debug!(path = %path.display(), "promoting 1D LUT to 3D");
                    Ok(curve.to_3d(DEFAULT_GRID_SIZE)?)
                }
                Err(_) => Err(LutError::ParseError(first_err).into()),
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Concatenates one pair of LUT files and writes the result.
///
/// Order matters: `first` is applied before `second`. The combined table
/// keeps `first`'s resolution and is named `{first}_PLUS_{second}` from the
/// file stems. The output's parent directory is created if absent
/// (idempotent, so concurrent items targeting the same directory are safe).
///
/// Returns a [`ResultRecord`] either way; all failures are folded into an
/// error-status record.
pub fn combine_pair(first: &Path, second: &Path, output: &Path) -> ResultRecord {
    let name = format!("{}_PLUS_{}", stem(first), stem(second));
    match try_combine(first, second, output, &name) {
        Ok(record) => record,
        Err(e) => {
            warn!(
                first = %first.display(),
                second = %second.display(),
                error = %e,
                "pair failed"
            );
            ResultRecord::failure(name, e.to_string())
        }
    }
}

fn try_combine(
    first: &Path,
    second: &Path,
    output: &Path,
    name: &str,
) -> OpsResult<ResultRecord> {
    let lut1 = load_as_3d(first)?.with_name(stem(first));
    let lut2 = load_as_3d(second)?.with_name(stem(second));

    let combined = lut1.compose(&lut2);
    let stats = combined.analyze();

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    cube::write_3d(output, &combined)?;

    debug!(
        name,
        output = %output.display(),
        min = stats.min,
        max = stats.max,
        clipped_ratio = stats.clipped_ratio,
        "pair combined"
    );

    Ok(ResultRecord::success(name, stats, output.to_path_buf()))
}

/// Enumerates the `.cube` files in a directory, sorted for a stable worklist.
fn cube_files_in(dir: &Path) -> OpsResult<Vec<PathBuf>> {
    let pattern = dir.join("*.cube");
    let pattern = pattern.to_string_lossy();
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?.filter_map(|r| r.ok()).collect();
    files.sort();
    Ok(files)
}

/// Concatenates two LUT inputs, batching when one side is a directory.
///
/// Order: `input_a` is applied first, then `input_b`.
///
/// # Resolution rules
///
/// - **file + file**: one pair. `output` is used verbatim when it ends in
///   `.cube`, otherwise it is treated as a directory receiving a derived
///   `{a}_PLUS_{b}.cube` filename.
/// - **one directory**: every `.cube` file in the directory is paired with
///   the fixed other side, preserving apply order. `output` must be a
///   directory; a `.cube` path fails with
///   [`OpsError::InvalidOutputTarget`].
/// - **two directories**: [`OpsError::InvalidInputCombination`], before any
///   I/O.
///
/// # Dispatch
///
/// Pairs run on a worker pool private to this call (`workers` threads,
/// 0 = available parallelism). Each pair loads its own inputs and writes
/// its own output; a failing pair becomes an error-status record and its
/// siblings keep running. Records arrive in nondeterministic order.
pub fn process(
    input_a: &Path,
    input_b: &Path,
    output: &Path,
    workers: usize,
) -> OpsResult<Vec<ResultRecord>> {
    let a_is_dir = input_a.is_dir();
    let b_is_dir = input_b.is_dir();

    if a_is_dir && b_is_dir {
        return Err(OpsError::InvalidInputCombination);
    }

    let items: Vec<WorkItem> = if !a_is_dir && !b_is_dir {
        let output = if is_cube_path(output) {
            output.to_path_buf()
        } else {
            output.join(format!("{}_PLUS_{}.cube", stem(input_a), stem(input_b)))
        };
        vec![WorkItem {
            first: input_a.to_path_buf(),
            second: input_b.to_path_buf(),
            output,
        }]
    } else {
        if is_cube_path(output) {
            return Err(OpsError::InvalidOutputTarget(format!(
                "batch over a directory needs a directory output, got file path {}",
                output.display()
            )));
        }

        let (dir, fixed, dir_is_first) = if a_is_dir {
            (input_a, input_b, true)
        } else {
            (input_b, input_a, false)
        };

        let files = cube_files_in(dir)?;
        info!(
            count = files.len(),
            dir = %dir.display(),
            fixed = %fixed.display(),
            "resolved batch worklist"
        );

        files
            .into_iter()
            .map(|file| {
                let (first, second) = if dir_is_first {
                    (file, fixed.to_path_buf())
                } else {
                    (fixed.to_path_buf(), file)
                };
                let output = output.join(format!(
                    "{}_PLUS_{}.cube",
                    stem(&first),
                    stem(&second)
                ));
                WorkItem {
                    first,
                    second,
                    output,
                }
            })
            .collect()
    };

    if items.is_empty() {
        warn!("nothing to do: no .cube files matched");
        return Ok(Vec::new());
    }

    // A pool private to this call, so the caller's worker choice never
    // perturbs the global pool.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let records: Vec<ResultRecord> = pool.install(|| {
        items
            .par_iter()
            .map(|item| combine_pair(&item.first, &item.second, &item.output))
            .collect()
    });

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    info!(
        total = records.len(),
        ok = records.len() - failed,
        failed,
        "batch complete"
    );

    Ok(records)
}

//! LUT resize command

use crate::ResizeArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ResizeArgs, verbose: bool) -> Result<()> {
    if verbose {
        println!(
            "Resampling {} to {}^3",
            args.input.display(),
            args.size
        );
    }

    let path = lutforge_ops::resize(&args.input, &args.output, args.size)?;
    println!("[OK] {}", path.display());
    Ok(())
}

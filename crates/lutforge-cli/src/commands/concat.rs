//! LUT concatenation command

use crate::ConcatArgs;
use anyhow::{Result, bail};
use lutforge_ops::process;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ConcatArgs, verbose: bool) -> Result<()> {
    trace!(
        input1 = %args.input1.display(),
        input2 = %args.input2.display(),
        "concat::run"
    );

    if verbose {
        println!("Input 1: {}", args.input1.display());
        println!("Input 2: {}", args.input2.display());
        println!("Output:  {}", args.output.display());
    }

    let records = process(&args.input1, &args.input2, &args.output, args.workers)?;

    if records.is_empty() {
        bail!("no .cube files to process");
    }

    let mut failed = 0;
    for r in &records {
        if r.is_ok() {
            let path = r
                .output_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("[OK] {} -> {}", r.name, path);
            if r.is_clipped() {
                println!(
                    "     warning: {:.2}% of samples outside [0,1] (min {:.4}, max {:.4})",
                    r.clipped_ratio * 100.0,
                    r.min,
                    r.max
                );
            }
        } else {
            failed += 1;
            eprintln!("[ERROR] {}: {}", r.name, r.message);
        }
    }

    println!(
        "Processed: {} success, {} failed",
        records.len() - failed,
        failed
    );

    if failed > 0 {
        bail!("{} pairs failed", failed);
    }

    Ok(())
}

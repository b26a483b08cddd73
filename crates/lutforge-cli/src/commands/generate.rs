//! LUT generation command

use crate::GenerateArgs;
use anyhow::{Context, Result, bail};
use lutforge_color::AdaptationMethod;
use lutforge_ops::{generate, generate_many};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let cat: AdaptationMethod = args
        .cat
        .parse()
        .with_context(|| format!("bad --cat value '{}'", args.cat))?;

    if verbose {
        println!("Source: {}", args.source);
        println!("Size:   {0}^3 = {1} samples", args.size, args.size.pow(3));
        println!("CAT:    {}", cat);
    }

    if args.batch {
        let written = generate_many(
            &args.source,
            args.targets.as_deref(),
            args.size,
            &args.output_dir,
            cat,
        )?;

        for path in &written {
            println!("[OK] {}", path.display());
        }
        println!("Generated {} LUTs", written.len());
        Ok(())
    } else {
        let Some(target) = args.target.as_deref() else {
            bail!("--target is required unless --batch is given");
        };

        let path = generate(&args.source, target, args.size, args.output.as_deref(), cat)?;
        println!("[OK] {}", path.display());
        Ok(())
    }
}

use crate::cli::CliContext;
use crate::core::checker::DirectoryChecker;
use crate::models::error_kind::ErrorKind;
use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directories to check
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct PathReport {
    path: String,
    ok: bool,
    errors: Vec<ErrorKind>,
}

pub fn run(ctx: &CliContext, args: CheckArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let checker = DirectoryChecker::new().with_tracer(ctx.tracer);
    let mut reports = Vec::new();
    for path in &args.paths {
        let errors = checker.check(path)?;
        reports.push(PathReport {
            path: path.clone(),
            ok: errors.is_empty(),
            errors,
        });
    }
    let failed = reports.iter().filter(|r| !r.ok).count();

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&reports).context("serialize check report")?;
        println!("{}", json);
    } else {
        for report in &reports {
            println!("Check: {}", report.path);
            if report.ok {
                println!("  [PASS] usable read/write directory");
            }
            for kind in &report.errors {
                println!("  [FAIL] {}: {}", kind.symbol(), kind.default_message());
            }
        }
        println!();
        println!(
            "Check summary: {} pass, {} fail",
            reports.len() - failed,
            failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::output::{build_summary, write_reports};
use crate::registry::ParserRegistry;
use crate::scan::{ScanOptions, Scanner};
use chrono::Local;
use tracing::{error, info};

pub async fn execute(args: ScanArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(target) = args.target {
        config.target = target;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }

    let registry = ParserRegistry::default();
    config.validate(&registry)?;

    let options = ScanOptions {
        tool_filter: args.tools,
    };

    // Dated report directory (reports/YYYY-MM-DD/)
    let date_str = Local::now().format("%Y-%m-%d").to_string();
    let report_dir = config.report_dir.join(&date_str);
    info!("Reports will be written to {:?}", report_dir);

    let target = config.target.clone();
    let scanner = Scanner::new(config);
    let report = scanner.run(&registry, &options).await?;

    let summary = build_summary(&report, &target, report_dir.clone());
    write_reports(&report_dir, &summary, &report.issues)?;

    info!(
        "Completed in {:.1}s: {} ({} high, {} normal, {} low) across {} files",
        report.total_duration.as_secs_f64(),
        report.issues,
        report.issues.high_priority_size(),
        report.issues.normal_priority_size(),
        report.issues.low_priority_size(),
        report.issues.affected_file_count(),
    );
    println!("{}", report.issues);

    if args.fail_on_high && report.issues.high_priority_size() > 0 {
        error!(
            "Exiting with error: {} high priority issues",
            report.issues.high_priority_size()
        );
        std::process::exit(1);
    }

    Ok(())
}

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use dashboard::bridge::DashboardBridge;
use dashboard::model::ReportModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ReportConfig;
use workflow::runner::Runner;

mod dashboard;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing coastal monitoring report driver")]
struct Args {
    /// Run a single offline synthesis pass and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a report config from YAML
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, default_value = "2025-01-01")]
    start_date: NaiveDate,
    #[arg(long, default_value = "2025-12-31")]
    end_date: NaiveDate,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write the assembled report model as JSON for the rendering layer
    #[arg(long)]
    export: Option<PathBuf>,
    /// Keep the dashboard bridge alive for incoming report requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.report {
        ReportConfig::load(path)?
    } else {
        ReportConfig::from_args(args.start_date, args.end_date, args.seed)
    };

    let runner = Runner::new(config.clone());
    let bridge = DashboardBridge::new();

    if args.offline || args.export.is_some() {
        let result = runner.execute()?;

        println!(
            "Offline run -> {} water-quality samples, {} velocity rows, window {} days",
            result.smoothed_water_quality.len(),
            result.velocity.len(),
            config.smoothing_window_days
        );

        let model = ReportModel::from_result(&config, &result)?;
        bridge.publish(&model)?;
        bridge.publish_status("Offline report ready.");

        if let Some(path) = args.export.as_ref() {
            let payload =
                serde_json::to_string_pretty(&model).context("serializing report model")?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, payload)
                .with_context(|| format!("writing report model {}", path.display()))?;
            println!("Report model exported to {}", path.display());
        }

        let report = format!(
            "samples={} window_days={} velocity_rows={} notes={:?}\n",
            result.smoothed_water_quality.len(),
            config.smoothing_window_days,
            result.velocity.len(),
            result.notes
        );
        let report_path = PathBuf::from("tools/data/offline_report.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;

        let metrics = bridge.metrics().snapshot();
        log::info!(
            "reports published {}, samples emitted {}, failures {}",
            metrics.reports_published,
            metrics.samples_emitted,
            metrics.failures
        );
    }
    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

//! 距离向量路由仿真
//!
//! 在给定拓扑上运行分布式 Bellman-Ford，打印最终距离表与最短路径

use clap::Parser;
use dvsim_rs::error::{ConfigError, SimError};
use dvsim_rs::report::{DistanceTableView, PathLine, Report, verify_against_floyd_warshall};
use dvsim_rs::sim::{SimConfig, Simulator, TopologySpec};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "dvsim", about = "距离向量路由协议离散事件仿真")]
struct Args {
    /// Path to a JSON simulation config; defaults to the 3-node reference topology
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use a random topology with this many nodes instead
    #[arg(long, conflicts_with = "config")]
    random: Option<usize>,

    /// Enable link-change events
    #[arg(long)]
    link_change: bool,

    /// Seed for transit-delay jitter and random topology generation
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many events and report non-convergence
    #[arg(long)]
    max_events: Option<u64>,

    /// Write the final state as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Check converged vectors against Floyd-Warshall; exit non-zero on mismatch
    #[arg(long)]
    verify: bool,
}

fn build_config(args: &Args) -> Result<SimConfig, SimError> {
    let mut cfg = match (&args.config, args.random) {
        (Some(path), _) => SimConfig::from_json_file(path)?,
        (None, Some(nodes)) => SimConfig::new(TopologySpec::Random { nodes }),
        (None, None) => SimConfig::new(TopologySpec::Reference),
    };
    if args.link_change {
        cfg.enable_link_changes = true;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if args.max_events.is_some() {
        cfg.max_events = args.max_events;
    }
    Ok(cfg)
}

fn run(args: &Args) -> Result<bool, SimError> {
    let cfg = build_config(args)?;
    let mut sim = Simulator::new(&cfg)?;
    let outcome = sim.run()?;
    let stats = outcome.stats();

    if outcome.converged() {
        println!(
            "Simulator terminated at t={}, no packets in medium.",
            stats.final_time
        );
    } else {
        println!(
            "Simulator stopped at t={} after {} events without converging.",
            stats.final_time, stats.events
        );
    }
    println!("Total number of messages: {}", stats.total_msgs);

    println!("\nFinal distance tables:");
    for node in sim.nodes() {
        println!();
        print!(
            "{}",
            DistanceTableView {
                owner: node.id(),
                table: node.dist_table(),
            }
        );
    }

    let report = Report::collect(&sim, &outcome)?;
    println!("\nShortest paths:");
    for p in &report.paths {
        match &p.path {
            Some(path) => println!(
                "{}",
                PathLine {
                    from: p.from,
                    to: p.to,
                    path,
                }
            ),
            None => println!("Path from Node {} to {} is not settled", p.from, p.to),
        }
    }

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&report).map_err(ConfigError::from)?;
        fs::write(path, json).map_err(ConfigError::from)?;
        info!(path = %path.display(), "写出 JSON 报告");
    }

    let mut ok = outcome.converged();
    if args.verify {
        let mismatches = verify_against_floyd_warshall(&sim);
        for m in &mismatches {
            warn!(
                node = %m.node,
                dest = %m.dest,
                got = %m.got,
                expected = %m.expected,
                "与 Floyd-Warshall 结果不一致"
            );
        }
        println!(
            "\nVerification: {}",
            if mismatches.is_empty() { "ok" } else { "FAILED" }
        );
        ok &= mismatches.is_empty();
    }

    Ok(ok)
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!(error = %e, "仿真失败");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

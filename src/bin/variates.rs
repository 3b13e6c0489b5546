//! 随机变量生成器
//!
//! 用线性同余发生器生成样本，打印前 100 个值和频数表。

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use stylist_sim::SimError;
use stylist_sim::variate::{Distribution, FrequencyTable};

/// 最多打印的样本个数
const PREVIEW: usize = 100;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Uniform,
    Exponential,
    Normal,
}

#[derive(Debug, Parser)]
#[command(name = "variates", about = "生成均匀/指数/正态样本并统计频数")]
struct Args {
    #[arg(long, value_enum, default_value_t = Kind::Uniform)]
    dist: Kind,

    #[arg(long, default_value_t = 0.0)]
    a: f64,
    #[arg(long, default_value_t = 1.0)]
    b: f64,

    #[arg(long, default_value_t = 1.0)]
    lambda: f64,

    #[arg(long, default_value_t = 0.0)]
    mu: f64,
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,

    /// 样本量
    #[arg(long, default_value_t = 1000)]
    n: usize,

    /// 频数表区间个数（1..=1000）
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// 种子（不指定则从系统熵源取）
    #[arg(long)]
    seed: Option<u32>,

    /// 把样本和频数表写成 JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), SimError> {
    let dist = match args.dist {
        Kind::Uniform => Distribution::Uniform {
            a: args.a,
            b: args.b,
        },
        Kind::Exponential => Distribution::Exponential {
            lambda: args.lambda,
        },
        Kind::Normal => Distribution::Normal {
            mu: args.mu,
            sigma: args.sigma,
        },
    };
    let seed = args.seed.unwrap_or_else(rand::random::<u32>);
    tracing::info!(?dist, seed, n = args.n, "开始采样");

    let values = dist.sample(seed, args.n)?;
    let table = FrequencyTable::build(&values, args.bins, dist.histogram_range(&values))?;

    let preview = values
        .iter()
        .take(PREVIEW)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > PREVIEW {
        println!("values: {preview} ... (+{} more)", values.len() - PREVIEW);
    } else {
        println!("values: {preview}");
    }
    for (i, bin) in table.bins.iter().enumerate() {
        let close = if i + 1 == table.bins.len() { ']' } else { ')' };
        println!(
            "bin {:>2} [{:.4}, {:.4}{close} count={} relative={:.4}",
            i + 1,
            bin.lower,
            bin.upper,
            bin.count,
            bin.relative
        );
    }

    if let Some(path) = &args.json {
        let doc = serde_json::json!({
            "distribution": dist,
            "seed": seed,
            "values": values,
            "table": table,
        });
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
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
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

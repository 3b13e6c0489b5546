//! 理发店排队仿真
//!
//! 运行一次仿真，打印汇总指标；可选导出状态快照和单个顾客的 Euler 积分明细。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use stylist_sim::SimError;
use stylist_sim::salon::{SalonConfig, UniformRange, run_simulation};
use stylist_sim::sim::{Horizon, Termination};

#[derive(Debug, Parser)]
#[command(
    name = "stylist-sim",
    about = "理发店排队仿真：服务时长由 Euler 积分求得"
)]
struct Args {
    /// 参数文件（JSON，字段同 SalonConfig），命令行参数会覆盖其中的值
    #[arg(long)]
    config: Option<PathBuf>,

    /// 仿真多少小时
    #[arg(long, conflicts_with = "days")]
    hours: Option<u32>,

    /// 仿真多少天（每天 480 分钟）
    #[arg(long)]
    days: Option<u32>,

    /// 最多保留多少行快照
    #[arg(long)]
    max_rows: Option<usize>,

    /// 从哪个绝对分钟开始记录快照
    #[arg(long)]
    display_from: Option<f64>,

    /// Euler 步长 h
    #[arg(long)]
    step: Option<f64>,

    #[arg(long)]
    arrival_a: Option<f64>,
    #[arg(long)]
    arrival_b: Option<f64>,

    #[arg(long)]
    attention_a: Option<f64>,
    #[arg(long)]
    attention_b: Option<f64>,

    /// D 的截止阈值
    #[arg(long)]
    cutoff: Option<f64>,

    /// 固定种子（不指定则不可复现）
    #[arg(long)]
    seed: Option<u32>,

    /// 均匀数不取整
    #[arg(long)]
    no_round: bool,

    /// 把快照写成 JSON 数组
    #[arg(long)]
    rows_json: Option<PathBuf>,

    /// 导出积分明细：天序号
    #[arg(long, requires = "export_customer")]
    export_day: Option<u32>,

    /// 导出积分明细：当天顾客序号
    #[arg(long, requires = "export_day")]
    export_customer: Option<u32>,

    /// 导出时使用的步长（默认与仿真相同）
    #[arg(long)]
    export_h: Option<f64>,

    /// 积分明细输出文件（JSON）；不指定则只打印结果
    #[arg(long)]
    export_json: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SalonConfig, SimError> {
    let mut cfg = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SalonConfig::default(),
    };
    if let Some(h) = args.hours {
        cfg.horizon = Horizon::Hours(h);
    }
    if let Some(d) = args.days {
        cfg.horizon = Horizon::Days(d);
    }
    if let Some(v) = args.max_rows {
        cfg.max_rows = v;
    }
    if let Some(v) = args.display_from {
        cfg.display_from = v;
    }
    if let Some(v) = args.step {
        cfg.step = v;
    }
    cfg.arrival = UniformRange::new(
        args.arrival_a.unwrap_or(cfg.arrival.a),
        args.arrival_b.unwrap_or(cfg.arrival.b),
    );
    cfg.attention = UniformRange::new(
        args.attention_a.unwrap_or(cfg.attention.a),
        args.attention_b.unwrap_or(cfg.attention.b),
    );
    if let Some(v) = args.cutoff {
        cfg.cutoff = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.no_round {
        cfg.rnd_decimals = None;
    }
    Ok(cfg)
}

fn run(args: &Args) -> Result<(), SimError> {
    let cfg = load_config(args)?;
    let out = run_simulation(&cfg)?;

    if let Some(path) = &args.rows_json {
        fs::write(path, serde_json::to_string_pretty(&out.rows)?)?;
    }

    let termination = match out.termination {
        Termination::Completed => "completed",
        Termination::IterationLimit => "iteration_limit",
    };
    println!(
        "done: termination={termination} events={} rows={}",
        out.processed,
        out.rows.len()
    );
    let m = &out.metrics;
    println!(
        "metrics: arrivals={} served={} abandoned={} service_time_total={:.2} mean_service_time={:.2} days_closed_on_time={}",
        m.total_arrivals,
        m.total_served,
        m.total_abandoned,
        m.cumulative_service_time,
        m.mean_service_time,
        m.days_closed_on_time
    );

    if let (Some(day), Some(customer)) = (args.export_day, args.export_customer) {
        let h = args.export_h.unwrap_or(cfg.step);
        let report = out.store.replay(day, customer, h)?;
        println!(
            "euler: day={} customer={} c={} t={:.2} h={} final_time={:.4} final_value={:.4} steps={}",
            report.day,
            report.customer,
            report.record.c,
            report.record.t_param,
            report.h,
            report.final_time,
            report.final_value,
            report.steps.len()
        );
        if let Some(path) = &args.export_json {
            fs::write(path, serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 初始化 tracing（日志写 stderr，stdout 只输出结果）
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

use super::Scripted;
use crate::salon::{SalonConfig, UniformRange, run_simulation};
use crate::sim::{EventKind, Horizon, Simulator, Termination};
use crate::trace::{ServerState, TraceRow};

fn reference_cfg(horizon: Horizon, seed: u32) -> SalonConfig {
    SalonConfig {
        horizon,
        max_rows: 100_000,
        display_from: 0.0,
        step: 0.1,
        arrival: UniformRange::new(2.0, 12.0),
        attention: UniformRange::new(130.0, 180.0),
        cutoff: 700.0,
        rnd_decimals: Some(2),
        seed: Some(seed),
    }
}

/// 每天 4 位顾客，各服务 2 分钟，停止接待时店里已经空了。
fn quiet_day_cfg(horizon: Horizon) -> SalonConfig {
    SalonConfig {
        horizon,
        max_rows: 10_000,
        display_from: 0.0,
        step: 1.0,
        arrival: UniformRange::new(100.0, 101.0),
        attention: UniformRange::new(40.0, 60.0),
        cutoff: 25.0,
        rnd_decimals: Some(2),
        seed: None,
    }
}

fn count(rows: &[TraceRow], kind: EventKind) -> usize {
    rows.iter().filter(|r| r.event == kind).count()
}

fn assert_row_invariants(rows: &[TraceRow]) {
    for row in rows {
        assert_eq!(row.queue_len, row.queue.len(), "row {}", row.index);
        assert_eq!(
            row.server == ServerState::Busy,
            row.in_service.is_some(),
            "row {}",
            row.index
        );
        let in_system = row.queue_len as u64 + u64::from(row.in_service.is_some());
        assert_eq!(
            row.served + row.abandoned + in_system,
            row.arrivals,
            "row {}",
            row.index
        );
        if let Some(id) = row.in_service {
            assert!(row.queue.iter().all(|c| c.id != id), "row {}", row.index);
        }
    }
}

#[test]
fn one_day_reference_run_accounts_for_every_arrival() {
    let out = run_simulation(&reference_cfg(Horizon::Days(1), 2024)).expect("run");
    assert_eq!(out.termination, Termination::Completed);
    assert!(out.processed < crate::sim::MAX_ITERATIONS);

    let rows = &out.rows;
    assert_eq!(count(rows, EventKind::StartOfDay), 1);
    assert_eq!(rows[0].event, EventKind::StartOfDay);
    let last = rows.last().expect("summary row");
    assert_eq!(last.event, EventKind::EndOfSimulation);
    assert_eq!(last.next_event, None);
    assert_eq!(count(rows, EventKind::EndOfSimulation), 1);

    let arrivals = count(rows, EventKind::Arrival) as u64;
    assert!(arrivals > 0);
    let m = &out.metrics;
    assert_eq!(m.total_arrivals, arrivals);
    // 整天跑完，没有顾客还在店里
    assert_eq!(m.total_served + m.total_abandoned, arrivals);
    assert_eq!(last.queue_len, 0);
    assert_eq!(last.in_service, None);
    assert_eq!(count(rows, EventKind::ServiceCompletion) as u64, m.total_served);
    assert_eq!(count(rows, EventKind::ImpatienceExpiry) as u64, m.total_abandoned);

    assert!(m.mean_service_time > 0.0);
    let total = m.mean_service_time * m.total_served as f64;
    assert!((total - m.cumulative_service_time).abs() < 1e-6);
    assert_row_invariants(rows);
}

#[test]
fn runs_are_reproducible_for_a_fixed_seed() {
    let a = run_simulation(&reference_cfg(Horizon::Hours(8), 7)).expect("run a");
    let b = run_simulation(&reference_cfg(Horizon::Hours(8), 7)).expect("run b");
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.metrics, b.metrics);
}

#[test]
fn multi_day_run_keeps_invariants() {
    let out = run_simulation(&reference_cfg(Horizon::Days(3), 99)).expect("run");
    assert_eq!(out.termination, Termination::Completed);
    assert_eq!(count(&out.rows, EventKind::StartOfDay), 3);
    let days: Vec<u32> = out.rows.iter().map(|r| r.day).collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));
    assert!(out.rows.windows(2).all(|w| {
        w[0].elapsed <= w[1].elapsed + 1e-9 || w[1].event == EventKind::EndOfSimulation
    }));
    assert_row_invariants(&out.rows);
}

#[test]
fn on_time_days_are_counted() {
    let sim = Simulator::new(quiet_day_cfg(Horizon::Days(2)), Scripted::constant(0.5))
        .expect("sim");
    let out = sim.run().expect("run");
    assert_eq!(out.termination, Termination::Completed);
    assert_eq!(out.metrics.days_closed_on_time, 2);
    assert_eq!(out.metrics.total_served, 8);
    assert_eq!(out.metrics.total_abandoned, 0);
    assert_eq!(out.metrics.cumulative_service_time, 16.0);
    assert_eq!(out.metrics.mean_service_time, 2.0);
    assert_eq!(count(&out.rows, EventKind::StartOfDay), 2);
}

#[test]
fn single_quiet_day_row_layout() {
    let sim = Simulator::new(quiet_day_cfg(Horizon::Days(1)), Scripted::constant(0.5))
        .expect("sim");
    let out = sim.run().expect("run");

    // 4 次到达、4 次完成、停止接待、新的一天，再加汇总行
    assert_eq!(out.processed, 10);
    assert_eq!(out.rows.len(), 11);
    let indices: Vec<u64> = out.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, (1..=10).chain(std::iter::once(10)).collect::<Vec<_>>());
    assert_eq!(out.rows[9].event, EventKind::IntakeClose);
    assert_eq!(out.rows[9].next_event, Some(EventKind::StartOfDay));

    let summary = &out.rows[10];
    assert_eq!(summary.event, EventKind::EndOfSimulation);
    assert_eq!(summary.elapsed, 480.0);
    assert_eq!(summary.clock, 0.0);
    assert_eq!(summary.served, 4);
    assert_eq!(summary.days_closed_on_time, 1);
}

#[test]
fn row_cap_replaces_last_row_with_summary() {
    let mut cfg = quiet_day_cfg(Horizon::Days(1));
    cfg.max_rows = 5;
    let out = Simulator::new(cfg, Scripted::constant(0.5))
        .expect("sim")
        .run()
        .expect("run");
    assert_eq!(out.processed, 10);
    assert_eq!(out.rows.len(), 5);
    assert_eq!(out.rows[3].index, 4);
    let last = out.rows.last().expect("summary");
    assert_eq!(last.event, EventKind::EndOfSimulation);
    assert_eq!(last.index, 10);
    assert_eq!(last.served, 4);
}

#[test]
fn display_window_skips_early_rows() {
    let mut cfg = quiet_day_cfg(Horizon::Days(1));
    cfg.display_from = 200.0;
    let out = Simulator::new(cfg, Scripted::constant(0.5))
        .expect("sim")
        .run()
        .expect("run");
    assert!(out.rows.iter().all(|r| r.elapsed >= 200.0));
    // 第一行是 201 分钟到达后的状态
    assert_eq!(out.rows[0].event, EventKind::Arrival);
    assert_eq!(out.rows[0].clock, 201.0);
}

#[test]
fn hours_horizon_ends_before_an_event_past_it() {
    let out = Simulator::new(quiet_day_cfg(Horizon::Hours(1)), Scripted::constant(0.5))
        .expect("sim")
        .run()
        .expect("run");
    assert_eq!(out.termination, Termination::Completed);
    assert_eq!(out.processed, 1);
    assert_eq!(out.rows.len(), 2);
    assert_eq!(out.rows[0].next_event, Some(EventKind::EndOfSimulation));
    assert_eq!(out.rows[1].event, EventKind::EndOfSimulation);
    assert_eq!(out.rows[1].elapsed, 60.0);
    assert_eq!(out.metrics.total_arrivals, 0);
}

#[test]
fn iteration_ceiling_is_reported_separately() {
    let out = Simulator::new(quiet_day_cfg(Horizon::Days(1)), Scripted::constant(0.5))
        .expect("sim")
        .with_max_iterations(3)
        .run()
        .expect("run");
    assert_eq!(out.termination, Termination::IterationLimit);
    assert_eq!(out.processed, 3);
    assert_eq!(out.rows.len(), 4);
    assert_eq!(out.rows[3].event, EventKind::EndOfSimulation);
}

#[test]
fn mean_service_time_is_zero_without_completions() {
    let out = Simulator::new(quiet_day_cfg(Horizon::Hours(1)), Scripted::constant(0.5))
        .expect("sim")
        .run()
        .expect("run");
    assert_eq!(out.metrics.total_served, 0);
    assert_eq!(out.metrics.mean_service_time, 0.0);
}

#[test]
fn summary_clock_is_not_negative_after_an_overrunning_day() {
    // 470.5 分钟到达，服务 20 分钟，当天在 490.5 分钟才结束
    let mut cfg = quiet_day_cfg(Horizon::Days(1));
    cfg.arrival = UniformRange::new(470.0, 471.0);
    cfg.cutoff = 3000.0;
    let out = Simulator::new(cfg, Scripted::constant(0.5))
        .expect("sim")
        .run()
        .expect("run");
    assert_eq!(out.termination, Termination::Completed);

    let done = out
        .rows
        .iter()
        .find(|r| r.event == EventKind::ServiceCompletion)
        .expect("completion row");
    assert!((done.clock - 490.5).abs() < 1e-9, "clock={}", done.clock);

    let last = out.rows.last().expect("summary");
    assert_eq!(last.event, EventKind::EndOfSimulation);
    assert_eq!(last.clock, 0.0);
    assert_eq!(last.elapsed, 480.0);
    assert_eq!(out.metrics.days_closed_on_time, 0);
}

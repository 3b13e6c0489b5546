use tracing::debug;

use super::TraceRow;

/// 行收集器（存内存）
#[derive(Debug)]
pub struct Recorder {
    display_from: f64,
    max_rows: usize,
    rows: Vec<TraceRow>,
}

impl Recorder {
    pub fn new(display_from: f64, max_rows: usize) -> Self {
        Self {
            display_from,
            max_rows,
            rows: Vec::new(),
        }
    }

    /// 绝对时间 `elapsed` 的状态是否需要记录
    pub fn wants(&self, elapsed: f64) -> bool {
        elapsed >= self.display_from && self.rows.len() < self.max_rows
    }

    pub fn push(&mut self, row: TraceRow) {
        self.rows.push(row);
    }

    /// 写入汇总行：已满则替换最后一行，否则追加。
    pub fn finish(&mut self, summary: TraceRow) {
        if self.rows.len() >= self.max_rows {
            debug!(max_rows = self.max_rows, "行数已满，汇总行替换最后一行");
            if let Some(last) = self.rows.last_mut() {
                *last = summary;
                return;
            }
        }
        self.rows.push(summary);
    }

    pub fn into_rows(self) -> Vec<TraceRow> {
        self.rows
    }
}

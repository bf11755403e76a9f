// 固定週期的重繪計時器
// 只累計經過時間，與實際的時鐘及渲染無關

use std::time::Duration;

use crate::error::{Error, Result};

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    elapsed: Duration,
    ticks: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::config("計時器週期不可為 0"));
        }
        Ok(Self {
            period,
            elapsed: Duration::ZERO,
            ticks: 0,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// 總共觸發過的次數
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 累加經過時間，回傳這次完成的週期數（超過 u32 時取上限），餘數保留到下次
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.elapsed.as_nanos() + elapsed.as_nanos();
        let period = self.period.as_nanos();
        let completed = total / period;
        let remainder = total % period;
        // 餘數小於 period，必定能放回 Duration
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        self.ticks = self.ticks.saturating_add(u64::try_from(completed).unwrap_or(u64::MAX));
        u32::try_from(completed).unwrap_or(u32::MAX)
    }

    /// 是否至少觸發一次
    pub fn step(&mut self, elapsed: Duration) -> bool {
        self.advance(elapsed) > 0
    }

    /// 距離下次觸發的時間
    pub fn remaining(&self) -> Duration {
        self.period - self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

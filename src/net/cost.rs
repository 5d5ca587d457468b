//! 链路代价 / 距离
//!
//! 非负整数度量，外加一个表示“不可达”的无穷值。所有加法都饱和到无穷，
//! 不会溢出或回绕。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// 距离或链路代价。JSON 中 `null` 表示无穷。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(u64::MAX);

    /// `u64::MAX` 保留给无穷，传入时会被截到 `u64::MAX - 1`。
    pub const fn new(v: u64) -> Cost {
        if v == u64::MAX { Cost(u64::MAX - 1) } else { Cost(v) }
    }

    pub fn is_infinite(self) -> bool {
        self == Cost::INFINITY
    }

    pub fn is_finite(self) -> bool {
        !self.is_infinite()
    }

    pub fn finite(self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// 超过 `bound` 的距离按无穷处理（RIP 式的有界无穷）。
    pub fn cap(self, bound: Cost) -> Cost {
        if self > bound { Cost::INFINITY } else { self }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        if self.is_infinite() || rhs.is_infinite() {
            return Cost::INFINITY;
        }
        match self.0.checked_add(rhs.0) {
            Some(v) if v != u64::MAX => Cost(v),
            _ => Cost::INFINITY,
        }
    }
}

impl From<u64> for Cost {
    fn from(v: u64) -> Self {
        Cost::new(v)
    }
}

impl From<Option<u64>> for Cost {
    fn from(v: Option<u64>) -> Self {
        v.map_or(Cost::INFINITY, Cost::new)
    }
}

impl From<Cost> for Option<u64> {
    fn from(c: Cost) -> Self {
        c.finite()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(v) => fmt::Display::fmt(&v, f),
            None => f.pad("inf"),
        }
    }
}

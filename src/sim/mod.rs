//! 仿真核心模块
//!
//! 此模块包含离散事件仿真的核心组件：仿真时间、事件、事件队列、配置和仿真器。

// 子模块声明
mod config;
mod event;
mod event_queue;
mod simulator;
mod time;

// 重新导出公共接口
pub use config::{DelaySpec, LinkChangeSpec, SimConfig, TopologySpec};
pub use event::{Event, EventKind};
pub use event_queue::EventQueue;
pub use simulator::{Path, RunOutcome, RunStats, Simulator};
pub use time::{SimTime, TICKS_PER_UNIT};

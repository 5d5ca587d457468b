mod config;
mod event_queue;
mod sim_time;
mod support;

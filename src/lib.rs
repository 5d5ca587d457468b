pub mod error;
pub mod net;
pub mod report;
pub mod sim;
pub mod topo;

#[cfg(test)]
mod test;

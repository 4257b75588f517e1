pub mod error;
pub mod queue;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod test;

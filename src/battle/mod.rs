pub mod engine;
pub mod registry;
pub mod state;

#[cfg(test)]
mod tests;

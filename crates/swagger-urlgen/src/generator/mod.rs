pub(crate) mod combinations;
pub(crate) mod context;
pub(crate) mod descriptor;
pub(crate) mod enumerator;
pub(crate) mod metrics;
pub mod orchestrator;
pub(crate) mod parameter;

#[cfg(test)]
mod tests;

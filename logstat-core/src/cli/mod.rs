pub mod config;
pub mod run;

#[cfg(test)]
mod tests;

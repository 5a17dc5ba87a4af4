pub mod driver;
pub mod resolver;
pub mod runner;
pub mod shutdown;

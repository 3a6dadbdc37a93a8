pub use self::app::BenchApp;

pub(crate) mod app;

//! Application services - Business logic orchestration

pub mod auto_post;
pub mod ticker_service;

pub use auto_post::AutoPoster;
pub use ticker_service::TickerService;

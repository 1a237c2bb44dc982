pub mod api;
pub mod app;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod model;
pub mod nav;
pub mod signal;
pub mod storage;
pub mod theme;
pub mod viewmodel;

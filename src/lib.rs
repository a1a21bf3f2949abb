//! 库存管理：商品序列、卡片渲染和终端界面

pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod notice;
pub mod render;
pub mod ui;

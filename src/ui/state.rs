//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::catalog::Catalog;
use crate::config::Config;
use crate::inventory::Inventory;
use crate::notice::{Alerts, Notice};
use crate::render::{Card, CardDeck};

/// 应用状态
pub struct App {
    pub inventory: Inventory<CardDeck, Alerts>,
    pub selected_index: usize,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Alert(Notice), // 阻塞式弹窗，确认前不接受其它输入
}

impl App {
    /// 创建新的应用实例并完成首次渲染
    pub fn new(config: &Config) -> Self {
        let catalog = if config.seed_demo_products {
            Catalog::seeded()
        } else {
            Catalog::new()
        };
        let inventory = Inventory::new(
            catalog,
            CardDeck::default(),
            Alerts::new(config.history_limit),
        )
        .with_currency(config.currency_symbol.clone());

        let mut app = Self {
            inventory,
            selected_index: 0,
        };
        app.inventory.start();
        app.clamp_selection();
        app
    }

    pub fn mode(&self) -> AppMode {
        match self.inventory.notifier().current() {
            Some(notice) => AppMode::Alert(notice),
            None => AppMode::Normal,
        }
    }

    pub fn cards(&self) -> &[Card] {
        self.inventory.surface().cards()
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.cards().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的卡片
    pub fn selected_card(&self) -> Option<&Card> {
        self.cards().get(self.selected_index)
    }
}

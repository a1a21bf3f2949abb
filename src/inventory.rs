//! 商品存储 + 渲染组件
//!
//! 输出面和通知通道都由外部注入，因此可以脱离终端直接测试。
//! 每个操作都是同步的：修改序列、完整重绘、发出通知。

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::{DEFAULT_CURRENCY, Product};
use crate::notice::{Notice, Notifier};
use crate::render::{Surface, render};

pub struct Inventory<S, N> {
    catalog: Catalog,
    surface: S,
    notifier: N,
    currency: String,
    started: bool,
}

impl<S: Surface, N: Notifier> Inventory<S, N> {
    pub fn new(catalog: Catalog, surface: S, notifier: N) -> Self {
        Self {
            catalog,
            surface,
            notifier,
            currency: DEFAULT_CURRENCY.to_string(),
            started: false,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// 启动信号：首次渲染，只生效一次
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        tracing::info!(products = self.catalog.len(), "inventory ready");
        self.render();
        true
    }

    /// 完整重绘
    pub fn render(&mut self) -> usize {
        render(&self.catalog, &mut self.surface, &self.currency)
    }

    pub fn append(&mut self, product: Product) {
        tracing::info!(name = %product.name, "product appended");
        self.catalog.append(product);
        self.render();
        self.notifier.notify(Notice::ProductAdded);
    }

    /// 追加固定的新商品
    pub fn add_product(&mut self) {
        self.append(Product::new_arrival());
    }

    /// 移除最后一条。序列为空时不修改、不重绘，只发出提醒。
    pub fn remove_last(&mut self) -> Option<Product> {
        match self.catalog.remove_last() {
            Ok(product) => {
                tracing::info!(name = %product.name, "last product removed");
                self.render();
                self.notifier.notify(Notice::ProductRemoved);
                Some(product)
            }
            Err(CatalogError::Empty) => {
                tracing::warn!("remove requested on empty inventory");
                self.notifier.notify(Notice::NothingToRemove);
                None
            }
        }
    }

    pub fn not_implemented(&mut self) {
        tracing::info!("unimplemented link activated");
        self.notifier.notify(Notice::NotImplemented);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Card, CardDeck};

    /// 统计 clear 次数的输出面
    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        cards: Vec<Card>,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.cards.clear();
        }

        fn push_card(&mut self, card: Card) {
            self.cards.push(card);
        }
    }

    fn inventory() -> Inventory<CardDeck, Vec<Notice>> {
        let mut inv = Inventory::new(Catalog::seeded(), CardDeck::default(), Vec::new());
        inv.start();
        inv
    }

    #[test]
    fn test_start_renders_once() {
        let mut inv = Inventory::new(Catalog::seeded(), CountingSurface::default(), Vec::new());
        assert!(inv.start());
        assert!(!inv.start());

        assert_eq!(inv.surface().clears, 1);
        assert_eq!(inv.surface().cards.len(), 3);
        assert_eq!(inv.surface().cards[0].name, "Product 1");
        assert_eq!(inv.surface().cards[0].price, "$299.99");
    }

    #[test]
    fn test_add_product() {
        let mut inv = inventory();
        inv.add_product();

        assert_eq!(inv.catalog().len(), 4);
        let last = inv.surface().cards().last().unwrap();
        assert_eq!(last.name, "New Product");
        assert_eq!(last.category, "Miscellaneous");
        assert_eq!(last.price, "$99.99");
        assert_eq!(last.stock, 10);
        assert_eq!(last.supplier, "New Supplier");
        assert_eq!(inv.notifier(), &vec![Notice::ProductAdded]);
    }

    #[test]
    fn test_remove_until_empty() {
        let mut inv = inventory();

        let removed: Vec<String> = (0..3)
            .filter_map(|_| inv.remove_last())
            .map(|p| p.name)
            .collect();
        assert_eq!(removed, vec!["Product 3", "Product 2", "Product 1"]);
        assert!(inv.catalog().is_empty());
        assert!(inv.surface().is_empty());

        assert!(inv.remove_last().is_none());
        assert_eq!(inv.catalog().len(), 0);
        assert_eq!(
            inv.notifier(),
            &vec![
                Notice::ProductRemoved,
                Notice::ProductRemoved,
                Notice::ProductRemoved,
                Notice::NothingToRemove,
            ]
        );
    }

    #[test]
    fn test_empty_remove_skips_render() {
        let mut inv = Inventory::new(Catalog::new(), CountingSurface::default(), Vec::new());
        inv.start();
        inv.remove_last();

        assert_eq!(inv.surface().clears, 1);
    }

    #[test]
    fn test_not_implemented_touches_nothing() {
        let mut inv = Inventory::new(Catalog::seeded(), CountingSurface::default(), Vec::new());
        inv.start();
        inv.not_implemented();

        assert_eq!(inv.catalog().len(), 3);
        assert_eq!(inv.surface().clears, 1);
        assert_eq!(inv.notifier(), &vec![Notice::NotImplemented]);
    }

    #[test]
    fn test_currency_override() {
        let mut inv = Inventory::new(Catalog::seeded(), CardDeck::default(), Vec::new())
            .with_currency("€");
        inv.start();
        assert_eq!(inv.surface().cards()[2].price, "€49.99");
    }
}

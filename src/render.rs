//! 渲染层
//!
//! 每次渲染都先清空输出面，再按序列顺序为每条商品生成一张卡片。
//! 不做增量 diff。

use std::fmt::Write as _;

use crate::catalog::Catalog;
use crate::models::{DEFAULT_CURRENCY, Product};

/// 一张商品卡片，字段顺序固定：图片、名称、分类、价格、库存、供应商
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub image: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: i64,
    pub supplier: String,
}

impl Card {
    pub fn from_product(product: &Product, currency: &str) -> Self {
        Self {
            image: product.image.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.display_price(currency),
            stock: product.stock,
            supplier: product.supplier.clone(),
        }
    }

    /// 卡片的文本行（图片地址之后的五个字段）
    pub fn lines(&self) -> [String; 5] {
        [
            self.name.clone(),
            format!("Category: {}", self.category),
            format!("Price: {}", self.price),
            format!("Stock: {}", self.stock),
            format!("Supplier: {}", self.supplier),
        ]
    }
}

/// 输出面：渲染结果的去处
pub trait Surface {
    /// 丢弃所有已有卡片
    fn clear(&mut self);
    fn push_card(&mut self, card: Card);
}

/// 完整渲染一遍，返回卡片数量
pub fn render<S: Surface + ?Sized>(catalog: &Catalog, surface: &mut S, currency: &str) -> usize {
    surface.clear();
    for product in catalog.snapshot() {
        surface.push_card(Card::from_product(product, currency));
    }
    tracing::debug!(cards = catalog.len(), "render pass");
    catalog.len()
}

/// 内存中的卡片列表，供 TUI 绘制
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Surface for CardDeck {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

/// 生成 `<article>` 卡片标记的输出面
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    html: String,
}

impl HtmlSurface {
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Surface for HtmlSurface {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn push_card(&mut self, card: Card) {
        let name = escape(&card.name);
        // 写入 String 不会失败
        let _ = write!(
            self.html,
            "<article class=\"bg-white p-4 rounded shadow\">\n\
             \x20 <img src=\"{}\" alt=\"Image of {}\" class=\"w-full h-48 object-cover rounded mb-4\" />\n\
             \x20 <h3 class=\"text-lg font-bold mb-2\">{}</h3>\n\
             \x20 <p class=\"text-gray-700\">Category: {}</p>\n\
             \x20 <p class=\"text-gray-700\">Price: {}</p>\n\
             \x20 <p class=\"text-gray-700\">Stock: {}</p>\n\
             \x20 <p class=\"text-gray-700\">Supplier: {}</p>\n\
             </article>\n",
            escape(&card.image),
            name,
            name,
            escape(&card.category),
            escape(&card.price),
            card.stock,
            escape(&card.supplier),
        );
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// 直接把商品序列渲染成 HTML
pub fn render_html(catalog: &Catalog) -> String {
    let mut surface = HtmlSurface::default();
    render(catalog, &mut surface, DEFAULT_CURRENCY);
    surface.html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    #[test]
    fn test_render_one_card_per_product() {
        let catalog = Catalog::seeded();
        let mut deck = CardDeck::default();

        assert_eq!(render(&catalog, &mut deck, "$"), 3);
        assert_eq!(deck.len(), 3);

        let first = &deck.cards()[0];
        assert_eq!(first.name, "Product 1");
        assert_eq!(first.category, "Electronics");
        assert_eq!(first.price, "$299.99");
        assert_eq!(first.stock, 50);
        assert_eq!(first.supplier, "Supplier A");
    }

    #[test]
    fn test_render_field_order() {
        let card = Card::from_product(&Product::new_arrival(), "$");
        assert_eq!(
            card.lines(),
            [
                "New Product".to_string(),
                "Category: Miscellaneous".to_string(),
                "Price: $99.99".to_string(),
                "Stock: 10".to_string(),
                "Supplier: New Supplier".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = Catalog::seeded();
        let mut deck = CardDeck::default();

        render(&catalog, &mut deck, "$");
        let once = deck.cards().to_vec();
        render(&catalog, &mut deck, "$");

        assert_eq!(deck.cards(), once.as_slice());
    }

    #[test]
    fn test_render_empty_clears_surface() {
        let mut deck = CardDeck::default();
        render(&Catalog::seeded(), &mut deck, "$");
        render(&Catalog::new(), &mut deck, "$");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_html_markup() {
        let html = render_html(&Catalog::seeded());

        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains("src=\"https://placehold.co/600x400\""));
        assert!(html.contains("alt=\"Image of Product 1\""));
        assert!(html.contains("<h3 class=\"text-lg font-bold mb-2\">Product 1</h3>"));
        assert!(html.contains("<p class=\"text-gray-700\">Price: $299.99</p>"));
        assert!(html.contains("<p class=\"text-gray-700\">Supplier: Supplier C</p>"));

        let name = html.find("Product 1</h3>").unwrap();
        let category = html.find("Category: Electronics").unwrap();
        let stock = html.find("Stock: 50").unwrap();
        assert!(name < category && category < stock);
    }

    #[test]
    fn test_html_escapes_text() {
        let catalog = Catalog::from_products(vec![Product::new("<b>", "A&B", 1.0, 1, "\"x\"")]);
        let html = render_html(&catalog);

        assert!(html.contains("&lt;b&gt;</h3>"));
        assert!(html.contains("Category: A&amp;B"));
        assert!(html.contains("Supplier: &quot;x&quot;"));
    }
}

use serde::{Deserialize, Serialize};

/// 占位图片地址
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// 默认货币符号
pub const DEFAULT_CURRENCY: &str = "$";

/// 商品记录
///
/// 没有 id 字段，记录只通过在序列中的位置区分。
/// price / stock 不做任何校验，负数也照单全收。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub supplier: String,
    #[serde(default = "default_image")]
    pub image: String,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            stock,
            supplier: supplier.into(),
            image: default_image(),
        }
    }

    /// "添加"按钮每次追加的固定商品
    pub fn new_arrival() -> Self {
        Self::new("New Product", "Miscellaneous", 99.99, 10, "New Supplier")
    }

    /// 带货币符号、保留两位小数的价格
    pub fn display_price(&self, currency: &str) -> String {
        format_price(self.price, currency)
    }
}

/// 启动时的三条演示商品
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("Product 1", "Electronics", 299.99, 50, "Supplier A"),
        Product::new("Product 2", "Furniture", 199.99, 20, "Supplier B"),
        Product::new("Product 3", "Clothing", 49.99, 100, "Supplier C"),
    ]
}

/// 价格格式化：`$X.XX`
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_products() {
        let products = demo_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[0].category, "Electronics");
        assert_eq!(products[0].stock, 50);
        assert_eq!(products[0].supplier, "Supplier A");
        assert_eq!(products[2].category, "Clothing");
        assert!(products.iter().all(|p| p.image == PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_new_arrival_is_fixed() {
        let a = Product::new_arrival();
        let b = Product::new_arrival();
        assert_eq!(a, b);
        assert_eq!(a.name, "New Product");
        assert_eq!(a.category, "Miscellaneous");
        assert_eq!(a.stock, 10);
        assert_eq!(a.supplier, "New Supplier");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(299.99, "$"), "$299.99");
        assert_eq!(format_price(5.0, "$"), "$5.00");
        assert_eq!(format_price(0.5, "€"), "€0.50");
        assert_eq!(format_price(-3.0, "$"), "$-3.00");
    }

    #[test]
    fn test_image_defaults_when_missing() {
        let product: Product = toml::from_str(
            "name = \"Lamp\"\ncategory = \"Home\"\nprice = 12.5\nstock = 3\nsupplier = \"Acme\"\n",
        )
        .unwrap();
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.display_price("$"), "$12.50");
    }
}

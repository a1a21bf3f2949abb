use crate::error::CatalogError;
use crate::models::{Product, demo_products};

/// 商品序列，唯一的数据来源
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以三条演示商品初始化
    pub fn seeded() -> Self {
        Self {
            products: demo_products(),
        }
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 追加到末尾，不做任何校验
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 移除最后一条；序列为空时不修改并返回 `CatalogError::Empty`
    pub fn remove_last(&mut self) -> Result<Product, CatalogError> {
        self.products.pop().ok_or(CatalogError::Empty)
    }

    pub fn snapshot(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use greengrocer::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
    content::{
        ContentBlock, ContentBlockId, ContentBlockRepository, ContentBlockUpdate, NewContentBlock,
    },
    errors::{DomainError, DomainResult},
    product::{NewProduct, Product, ProductFilter, ProductId, ProductRepository, ProductUpdate},
    slug::Slug,
};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    next_id: i64,
    categories: Vec<Category>,
    products: Vec<Product>,
    content: Vec<ContentBlock>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One in-memory store behind all three catalog repositories, so deleting a
/// category can detach its products the way the foreign key does.
#[derive(Default)]
pub struct InMemoryCatalog {
    tables: Mutex<Tables>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("catalog mutex poisoned")
    }

    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.lock();
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = CategoryId::new(tables.allocate_id())?;
        let stored = Category {
            id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            image_url: category.image_url,
            sort_order: category.sort_order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        tables.categories.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.lock();
        if let Some(slug) = &update.slug {
            if tables
                .categories
                .iter()
                .any(|c| &c.slug == slug && c.id != update.id)
            {
                return Err(DomainError::Conflict("category slug already exists".into()));
            }
        }
        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        update.apply_to(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.lock();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for product in tables.products.iter_mut() {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.lock().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        Ok(categories)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut tables = self.lock();
        if tables.products.iter().any(|p| p.slug == product.slug) {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        if let Some(category_id) = product.category_id {
            if !tables.categories.iter().any(|c| c.id == category_id) {
                return Err(DomainError::NotFound("category not found".into()));
            }
        }
        let id = ProductId::new(tables.allocate_id())?;
        let stored = Product {
            id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            unit: product.unit,
            category_id: product.category_id,
            image_url: product.image_url,
            in_stock: product.in_stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        tables.products.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut tables = self.lock();
        if let Some(slug) = &update.slug {
            if tables
                .products
                .iter()
                .any(|p| &p.slug == slug && p.id != update.id)
            {
                return Err(DomainError::Conflict("product slug already exists".into()));
            }
        }
        let product = tables
            .products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        update.apply_to(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut tables = self.lock();
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.lock().products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        Ok(self
            .lock()
            .products
            .iter()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .lock()
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        if filter.active_only {
            products.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        } else {
            products.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
            });
        }
        Ok(products)
    }
}

#[async_trait]
impl ContentBlockRepository for InMemoryCatalog {
    async fn insert(&self, block: NewContentBlock) -> DomainResult<ContentBlock> {
        let mut tables = self.lock();
        if tables.content.iter().any(|b| b.slug == block.slug) {
            return Err(DomainError::Conflict(
                "content block slug already exists".into(),
            ));
        }
        let id = ContentBlockId::new(tables.allocate_id())?;
        let stored = ContentBlock {
            id,
            title: block.title,
            slug: block.slug,
            body: block.body,
            created_at: block.created_at,
            updated_at: block.updated_at,
        };
        tables.content.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ContentBlockUpdate) -> DomainResult<ContentBlock> {
        let mut tables = self.lock();
        if let Some(slug) = &update.slug {
            if tables
                .content
                .iter()
                .any(|b| &b.slug == slug && b.id != update.id)
            {
                return Err(DomainError::Conflict(
                    "content block slug already exists".into(),
                ));
            }
        }
        let block = tables
            .content
            .iter_mut()
            .find(|b| b.id == update.id)
            .ok_or_else(|| DomainError::NotFound("content block not found".into()))?;
        update.apply_to(block);
        Ok(block.clone())
    }

    async fn delete(&self, id: ContentBlockId) -> DomainResult<()> {
        let mut tables = self.lock();
        let before = tables.content.len();
        tables.content.retain(|b| b.id != id);
        if tables.content.len() == before {
            return Err(DomainError::NotFound("content block not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ContentBlockId) -> DomainResult<Option<ContentBlock>> {
        Ok(self.lock().content.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ContentBlock>> {
        Ok(self
            .lock()
            .content
            .iter()
            .find(|b| &b.slug == slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ContentBlock>> {
        let mut blocks = self.lock().content.clone();
        blocks.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(blocks)
    }
}

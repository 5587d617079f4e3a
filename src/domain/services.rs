// src/domain/services.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::category::CategoryRepository;
use crate::domain::content::ContentBlockRepository;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductRepository;
use crate::domain::slug::Slug;

/// Catalog entity families. Each has its own slug namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Category,
    Product,
    ContentBlock,
}

impl CatalogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Category => "category",
            CatalogKind::Product => "product",
            CatalogKind::ContentBlock => "content",
        }
    }
}

/// Answers "which record of this kind already uses this slug?".
#[async_trait]
pub trait SlugOwnership: Send + Sync {
    async fn owner_of(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<i64>>;
}

/// [`SlugOwnership`] backed by the catalog repositories.
pub struct RepositorySlugOwnership {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
    content: Arc<dyn ContentBlockRepository>,
}

impl RepositorySlugOwnership {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        content: Arc<dyn ContentBlockRepository>,
    ) -> Self {
        Self {
            categories,
            products,
            content,
        }
    }
}

#[async_trait]
impl SlugOwnership for RepositorySlugOwnership {
    async fn owner_of(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<i64>> {
        let owner = match kind {
            CatalogKind::Category => self
                .categories
                .find_by_slug(slug)
                .await?
                .map(|c| i64::from(c.id)),
            CatalogKind::Product => self
                .products
                .find_by_slug(slug)
                .await?
                .map(|p| i64::from(p.id)),
            CatalogKind::ContentBlock => self
                .content
                .find_by_slug(slug)
                .await?
                .map(|b| i64::from(b.id)),
        };
        Ok(owner)
    }
}

/// Domain service responsible for producing unique slugs for catalog records.
pub struct CatalogSlugService {
    ownership: Arc<dyn SlugOwnership>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl CatalogSlugService {
    pub fn new(
        ownership: Arc<dyn SlugOwnership>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ownership,
            generator,
            clock,
        }
    }

    /// Preview of what a display name turns into, without uniqueness checks.
    pub fn preview(&self, text: &str) -> String {
        self.generator.slugify(text)
    }

    /// Slug derived from a display name. Names with nothing retainable fall
    /// back to `<kind>-<unix seconds>`.
    pub async fn generate_unique_slug(
        &self,
        kind: CatalogKind,
        source: &str,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(source);
        let base = if base.is_empty() {
            format!("{}-{}", kind.as_str(), self.clock.now().timestamp())
        } else {
            base
        };
        self.first_free(kind, base, ignore_id).await
    }

    /// Slug typed by an admin. Rejects text that normalizes to nothing.
    pub async fn normalize_requested_slug(
        &self,
        kind: CatalogKind,
        requested: &str,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(requested);
        if base.is_empty() {
            return Err(DomainError::validation(
                "slug must contain at least one letter or digit",
            ));
        }
        self.first_free(kind, base, ignore_id).await
    }

    async fn first_free(
        &self,
        kind: CatalogKind,
        base: String,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = Slug::new(candidate)?;
            match self.ownership.owner_of(kind, &slug).await? {
                Some(owner) if ignore_id == Some(owner) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::generate_slug;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        }
    }

    struct RuleSlugger;

    impl SlugGenerator for RuleSlugger {
        fn slugify(&self, input: &str) -> String {
            generate_slug(input)
        }
    }

    #[derive(Default)]
    struct TakenSlugs(Mutex<HashMap<(CatalogKind, String), i64>>);

    impl TakenSlugs {
        fn with(self, kind: CatalogKind, slug: &str, owner: i64) -> Self {
            self.0.lock().unwrap().insert((kind, slug.to_string()), owner);
            self
        }
    }

    #[async_trait]
    impl SlugOwnership for TakenSlugs {
        async fn owner_of(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<i64>> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .get(&(kind, slug.as_str().to_string()))
                .copied())
        }
    }

    fn service(taken: TakenSlugs) -> CatalogSlugService {
        CatalogSlugService::new(Arc::new(taken), Arc::new(RuleSlugger), Arc::new(FixedClock))
    }

    #[tokio::test]
    async fn free_slug_is_used_as_is() {
        let svc = service(TakenSlugs::default());
        let slug = svc
            .generate_unique_slug(CatalogKind::Product, "עגבניות שרי", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "עגבניות-שרי");
    }

    #[tokio::test]
    async fn taken_slug_gets_numeric_suffix() {
        let taken = TakenSlugs::default()
            .with(CatalogKind::Product, "עגבניות", 1)
            .with(CatalogKind::Product, "עגבניות-1", 2);
        let svc = service(taken);
        let slug = svc
            .generate_unique_slug(CatalogKind::Product, "עגבניות", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "עגבניות-2");
    }

    #[tokio::test]
    async fn namespaces_are_per_kind() {
        let taken = TakenSlugs::default().with(CatalogKind::Category, "fruit", 1);
        let svc = service(taken);
        let slug = svc
            .generate_unique_slug(CatalogKind::Product, "Fruit", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "fruit");
    }

    #[tokio::test]
    async fn own_slug_is_not_a_collision() {
        let taken = TakenSlugs::default().with(CatalogKind::Category, "fruit", 4);
        let svc = service(taken);
        let slug = svc
            .normalize_requested_slug(CatalogKind::Category, "Fruit", Some(4))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "fruit");
    }

    #[tokio::test]
    async fn empty_name_falls_back_to_kind_and_timestamp() {
        let svc = service(TakenSlugs::default());
        let slug = svc
            .generate_unique_slug(CatalogKind::Product, "!!!", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "product-1704067200");
    }

    #[tokio::test]
    async fn requested_slug_without_content_is_rejected() {
        let svc = service(TakenSlugs::default());
        let err = svc
            .normalize_requested_slug(CatalogKind::ContentBlock, "  ?! ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn preview_does_not_consult_the_store() {
        let svc = service(TakenSlugs::default().with(CatalogKind::Product, "apple-red", 1));
        assert_eq!(svc.preview("Apple  Red!!"), "apple-red");
    }
}

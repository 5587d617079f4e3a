use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_CONTENT_SLUG: &str = "content_blocks_slug_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_PRODUCT_PRICE: &str = "products_price_agorot_check";
const CNT_PRODUCT_UNIT: &str = "products_unit_check";

fn from_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_CATEGORY_SLUG => DomainError::Conflict("category slug already exists".into()),
        CNT_PRODUCT_SLUG => DomainError::Conflict("product slug already exists".into()),
        CNT_CONTENT_SLUG => DomainError::Conflict("content block slug already exists".into()),
        CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
        CNT_PRODUCT_PRICE => DomainError::Validation("price cannot be negative".into()),
        CNT_PRODUCT_UNIT => DomainError::Validation("unknown sale unit".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

fn from_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return from_constraint(constraint);
            }

            if let Some(mapped) = db_err.code().as_deref().and_then(from_sqlstate) {
                return mapped;
            }

            tracing::error!(error = %db_err, "unmapped database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::error!(error = %err, "database failure");
            DomainError::Persistence(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_constraints_are_conflicts() {
        for name in [CNT_CATEGORY_SLUG, CNT_PRODUCT_SLUG, CNT_CONTENT_SLUG] {
            assert!(matches!(from_constraint(name), DomainError::Conflict(_)));
        }
    }

    #[test]
    fn foreign_key_is_not_found_and_checks_are_validation() {
        assert!(matches!(
            from_constraint(CNT_PRODUCT_CATEGORY),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            from_constraint(CNT_PRODUCT_PRICE),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            from_constraint("something_else"),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn sqlstate_fallbacks() {
        assert!(matches!(from_sqlstate("23505"), Some(DomainError::Conflict(_))));
        assert!(matches!(from_sqlstate("23503"), Some(DomainError::NotFound(_))));
        assert!(from_sqlstate("42P01").is_none());
    }

    #[test]
    fn non_database_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}

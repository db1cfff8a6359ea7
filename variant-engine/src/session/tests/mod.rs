use super::*;
use crate::catalog::InMemoryCatalog;
use shared::models::{Attribute, AttributeInputType, AttributeValue};


// ========================================================================
// Catalog fixture: Color/Size are variant attributes, Material is a
// specification attribute.
// ========================================================================

pub const COLOR: i64 = 1;
pub const SIZE: i64 = 2;
pub const MATERIAL: i64 = 3;

pub const RED: i64 = 11;
pub const BLUE: i64 = 12;
pub const SMALL: i64 = 21;
pub const MEDIUM: i64 = 22;
pub const COTTON: i64 = 31;

fn attribute(id: i64, name: &str, is_variant: bool) -> Attribute {
    Attribute {
        id,
        name: name.to_string(),
        input_type: AttributeInputType::Enumerated,
        is_variant_attribute: is_variant,
        display_order: id as i32,
        is_active: true,
    }
}

fn value(id: i64, attribute_id: i64, value: &str, order: i32) -> AttributeValue {
    AttributeValue {
        id,
        attribute_id,
        value: value.to_string(),
        display_order: order,
    }
}

fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_attribute(
            attribute(COLOR, "Color", true),
            vec![value(RED, COLOR, "Red", 1), value(BLUE, COLOR, "Blue", 2)],
        )
        .with_attribute(
            attribute(SIZE, "Size", true),
            vec![
                value(SMALL, SIZE, "S", 1),
                value(MEDIUM, SIZE, "M", 2),
            ],
        )
        .with_attribute(
            attribute(MATERIAL, "Material", false),
            vec![value(COTTON, MATERIAL, "Cotton", 1)],
        )
}

fn test_product() -> ProductContext {
    ProductContext {
        product_id: 1001,
        base_price: Decimal::new(500, 2),
        sku: Some("TEE".to_string()),
    }
}

/// Log output is opt-in via RUST_LOG when debugging a failing test.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn test_session() -> EditSession {
    init_tracing();
    EditSession::new(Arc::new(test_catalog()), test_product())
}

// ========================================================================
// Helper: session with the full Color × Size grid selected
// ========================================================================

fn session_with_grid() -> EditSession {
    let mut session = test_session();
    session.select_value(COLOR, RED);
    session.select_value(COLOR, BLUE);
    session.select_value(SIZE, SMALL);
    session.select_value(SIZE, MEDIUM);
    session
}

/// Find the variant whose attribute map carries exactly the given
/// (attribute, display value) pairs.
fn find_variant<'a>(variants: &'a [Variant], pairs: &[(i64, &str)]) -> Option<&'a Variant> {
    variants.iter().find(|v| {
        v.attributes.parts.len() == pairs.len()
            && pairs
                .iter()
                .all(|(aid, val)| v.attributes.value_for(*aid) == Some(*val))
    })
}

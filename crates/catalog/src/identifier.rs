//! Product identifier resolution.
//!
//! URLs address a product by its raw id. Generating an identifier is the
//! identity mapping on `id` (no slugification), and resolving one is a
//! case-insensitive, first-match scan over whatever collection the caller
//! holds. A miss is an ordinary outcome (stale or mistyped link), so it is
//! reported as `None` rather than an error.

use commerce_core::{eq_ignore_case, Entity};

/// Produce the URL identifier for `product`: its id, unchanged.
pub fn generate_identifier<E>(product: &E) -> String
where
    E: Entity,
    E::Id: AsRef<str>,
{
    product.id().as_ref().to_owned()
}

/// Index of the first product whose id matches `identifier`, ignoring case.
pub fn resolve_position<E>(products: &[E], identifier: &str) -> Option<usize>
where
    E: Entity,
    E::Id: AsRef<str>,
{
    products
        .iter()
        .position(|p| eq_ignore_case(p.id().as_ref(), identifier))
}

/// Resolve `identifier` back to a product in `products`.
///
/// First match in sequence order wins when ids collide case-insensitively.
pub fn resolve_by_identifier<'a, E>(products: &'a [E], identifier: &str) -> Option<&'a E>
where
    E: Entity,
    E::Id: AsRef<str>,
{
    let found = resolve_position(products, identifier).map(|i| &products[i]);
    if found.is_none() {
        tracing::debug!(
            identifier,
            candidates = products.len(),
            "product identifier did not resolve"
        );
    }
    found
}

//! Marketplace categories query.

use serde_json::json;

use crate::request::Variables;

const MARKETPLACE_CATEGORIES: &str = "\
query getMarketplaceCategories($excludeEmpty: Boolean, $excludeSubcategories: Boolean, $includeCategories: [String!]) {
  marketplaceCategories(excludeEmpty: $excludeEmpty, excludeSubcategories: $excludeSubcategories, includeCategories: $includeCategories) {
    id
    description
  }
}
";

/// Build a query listing GitHub Marketplace categories.
///
/// `exclude_empty` drops categories without listings, `exclude_subcategories`
/// drops nested categories, and `include_categories` restricts the result to
/// the named category slugs (all slugs are returned when it is empty).
///
/// # Example
///
/// ```ignore
/// use octoql::queries::marketplace_categories;
///
/// let (query, variables) = marketplace_categories(true, true, &[]);
/// let data = client.execute(query, variables)?;
/// ```
pub fn marketplace_categories(
    exclude_empty: bool,
    exclude_subcategories: bool,
    include_categories: &[String],
) -> (String, Variables) {
    let mut variables = Variables::new();
    variables.insert("excludeEmpty".into(), json!(exclude_empty));
    variables.insert("excludeSubcategories".into(), json!(exclude_subcategories));
    variables.insert("includeCategories".into(), json!(include_categories));

    (MARKETPLACE_CATEGORIES.to_string(), variables)
}

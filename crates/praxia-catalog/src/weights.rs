use praxia_core::models::category::Category;

/// Weight of each category in the overall business health score.
///
/// The full table sums to 1.0; scoring renormalizes over whichever
/// categories actually have responses. The exhaustive match means a new
/// category cannot be added without deciding its weight here.
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::Financial => 0.20,
        Category::Operations => 0.15,
        Category::PatientCare => 0.15,
        Category::Technology => 0.10,
        Category::Compliance => 0.10,
        Category::Facilities => 0.05,
        Category::Marketing => 0.10,
        Category::Geography => 0.05,
        Category::Staffing => 0.05,
        Category::Automation => 0.05,
    }
}

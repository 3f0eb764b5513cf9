use crate::state::CatalogState;

/// Summarize catalog size and index vocabulary.
pub async fn handle_catalog_stats(state: &CatalogState) -> String {
    let catalog = state.catalog().await;
    format!(
        "Catalog: {}\n\
         • Exercises: {} items, {} indexed terms\n\
         • Equipment: {} items, {} indexed terms\n",
        state.config().catalog_path.display(),
        catalog.exercises().len(),
        catalog.exercises().term_count(),
        catalog.equipment().len(),
        catalog.equipment().term_count()
    )
}

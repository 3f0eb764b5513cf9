use crate::state::CatalogState;

/// Rebuild the catalog from its file on disk.
///
/// Searches keep using the previous catalog until the new one is fully built,
/// and keep using it for good if the reload fails.
pub async fn handle_reload_catalog(state: &CatalogState) -> Result<String, String> {
    let catalog = state.reload().await.map_err(|e| {
        tracing::warn!("Catalog reload failed: {}", e);
        format!("Reload failed, previous catalog still in use: {}", e)
    })?;

    Ok(format!(
        "Reloaded catalog from {}: {} exercises, {} equipment.",
        state.config().catalog_path.display(),
        catalog.exercises().len(),
        catalog.equipment().len()
    ))
}

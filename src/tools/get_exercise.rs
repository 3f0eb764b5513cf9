use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetExerciseRequest {
    /// Catalog id of the exercise
    pub id: u32,
}

/// Show every recorded detail of one exercise.
pub async fn handle_get_exercise(
    state: &CatalogState,
    request: GetExerciseRequest,
) -> Result<String, String> {
    let catalog = state.catalog().await;
    let exercise = catalog
        .exercise(request.id)
        .ok_or_else(|| format!("No exercise with id {} in the catalog.", request.id))?;

    let mut output = format!("{} [{}]\n", exercise.name, exercise.id);
    if !exercise.alternate_names.is_empty() {
        let _ = writeln!(output, "Also known as: {}", exercise.alternate_names.join(", "));
    }
    if let Some(muscle_group) = &exercise.muscle_group {
        let _ = writeln!(output, "Muscle group: {}", muscle_group);
    }
    if !exercise.equipment.is_empty() {
        let _ = writeln!(output, "Equipment: {}", exercise.equipment.join(", "));
    }

    Ok(output)
}

use tracing::info;

use super::temas::autocomplete_tema;
use crate::state::Context;

/// Consultar la respuesta de RADIA a una pregunta del catálogo
#[poise::command(slash_command)]
pub async fn pregunta(
    ctx: Context<'_>,
    #[description = "Tema del catálogo"]
    #[autocomplete = "autocomplete_tema"]
    tema: String,
    #[description = "Tu pregunta"]
    #[autocomplete = "autocomplete_pregunta"]
    pregunta: String,
) -> Result<(), anyhow::Error> {
    info!(user = ctx.author().name, tema, pregunta, "catalog lookup");

    // Tolerant lookup: unknown keys come back as the fixed fallback message.
    let answer = ctx.data().catalog.answer(&tema, &pregunta);

    ctx.say(format!(
        "**Pregunta seleccionada**\n{}\n\n**Respuesta básica de RADIA**\n{}\n\n\
         Si quieres más detalle, usa `/radia ampliar`.",
        pregunta, answer
    ))
    .await?;

    Ok(())
}

/// Autocomplete across every question in the catalog.
pub(super) async fn autocomplete_pregunta(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    ctx.data()
        .catalog
        .all_questions()
        .into_iter()
        .filter(|q| q.to_lowercase().contains(&partial))
        .map(str::to_string)
        .take(25)
        .collect()
}

mod ampliar;
mod pregunta;
mod temas;

use crate::state::Context;

/// RADIA - Asistente virtual para pacientes en radioterapia
#[poise::command(
    slash_command,
    subcommands(
        "temas::temas",
        "temas::preguntas",
        "pregunta::pregunta",
        "ampliar::ampliar"
    )
)]
pub async fn radia(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

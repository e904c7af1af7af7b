use tracing::info;

use super::pregunta::autocomplete_pregunta;
use crate::state::Context;

/// Notice appended after every AI-generated explanation.
const AI_NOTICE: &str = "⚠️ Esta respuesta ha sido generada por un modelo de inteligencia artificial y \
     no representa necesariamente la opinión del Servicio de Oncología Radioterápica. \
     Ante cualquier duda, consulta siempre con tu equipo médico.";

/// Ampliar información sobre una pregunta con IA
#[poise::command(slash_command)]
pub async fn ampliar(
    ctx: Context<'_>,
    #[description = "La duda que quieres ampliar"]
    #[autocomplete = "autocomplete_pregunta"]
    pregunta: String,
) -> Result<(), anyhow::Error> {
    // Acknowledge immediately so the user isn't staring at a loading spinner
    ctx.say(format!("Consultando… preparando una explicación ampliada de «{}».", pregunta))
        .await?;

    info!(user = ctx.author().name, pregunta, "expansion requested");

    // Always a displayable string: missing credential and service failures
    // arrive as user-readable messages, never as errors.
    let detailed = ctx.data().expander.expand_text(&pregunta).await;

    info!(pregunta, answer_len = detailed.len(), "expansion complete");

    let full = format!(
        "**Explicación ampliada (IA)**\n\n**Pregunta:** {}\n\n{}\n\n> {}",
        pregunta, detailed, AI_NOTICE
    );

    send_chunked(&ctx, &full).await
}

/// Send a message in Discord-safe chunks (max 1990 chars).
/// Uses ctx.say() for all chunks — poise routes follow-ups through the
/// interaction webhook, which doesn't require Send Messages channel permission.
async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    let mut remaining = text;
    while !remaining.is_empty() {
        let mut chunk_len = remaining.len().min(1990);
        // Accented text: back off to a char boundary before slicing.
        while !remaining.is_char_boundary(chunk_len) {
            chunk_len -= 1;
        }
        let split_at = if chunk_len < remaining.len() {
            remaining[..chunk_len]
                .rfind('\n')
                .or_else(|| remaining[..chunk_len].rfind(' '))
                .map(|i| i + 1)
                .unwrap_or(chunk_len)
        } else {
            chunk_len
        };
        let chunk = &remaining[..split_at];
        remaining = &remaining[split_at..];

        ctx.say(chunk).await?;
    }
    Ok(())
}

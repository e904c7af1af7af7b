use crate::state::Context;

/// Ver los temas del catálogo de RADIA
#[poise::command(slash_command)]
pub async fn temas(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let categories = ctx.data().catalog.categories();

    if categories.is_empty() {
        ctx.say("No se han podido cargar las categorías. Por favor, contacta con el servicio.")
            .await?;
        return Ok(());
    }

    let mut output = String::from("**Temas disponibles**\n\n");
    for (i, name) in categories.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, name));
    }
    output.push_str("\nUsa `/radia preguntas` para ver las preguntas de un tema.");

    ctx.say(output).await?;
    Ok(())
}

/// Ver las preguntas de un tema
#[poise::command(slash_command)]
pub async fn preguntas(
    ctx: Context<'_>,
    #[description = "Tema del catálogo"]
    #[autocomplete = "autocomplete_tema"]
    tema: String,
) -> Result<(), anyhow::Error> {
    let questions = ctx.data().catalog.questions(&tema);

    if questions.is_empty() {
        ctx.say("No hay preguntas disponibles en esta categoría.").await?;
        return Ok(());
    }

    let mut output = format!("**{}**\n\n", tema);
    for question in &questions {
        output.push_str(&format!("- {}\n", question));
    }
    output.push_str("\nUsa `/radia pregunta` para ver la respuesta de RADIA.");

    ctx.say(output).await?;
    Ok(())
}

/// Autocomplete for tema names from the catalog, in display order.
pub(super) async fn autocomplete_tema(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    ctx.data()
        .catalog
        .categories()
        .into_iter()
        .filter(|c| c.to_lowercase().contains(&partial))
        .map(str::to_string)
        .take(25)
        .collect()
}

//! Fixed prompt segments for the AI expansion of catalog questions.

/// Persona for every expansion request. It must never recommend doses or
/// treatment changes, and always defers final decisions to the medical team.
pub const SYSTEM_PROMPT: &str = "Eres un asistente para pacientes oncológicos que van a recibir radioterapia. \
     Respondes de forma clara, breve, tranquilizadora y sin tecnicismos innecesarios. \
     No das recomendaciones específicas de dosis ni cambias tratamientos. \
     Siempre recuerdas que las decisiones finales las toma el equipo médico que lleva al paciente.";

/// User segment embedding the literal question text.
pub fn user_prompt(question: &str) -> String {
    format!(
        "Explica con un poco más de detalle, para un paciente, esta duda sobre radioterapia: {}. \
         Usa un tono cercano y fácil de entender, sin tecnicismos. Respuesta en español.",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_question_verbatim() {
        let prompt = user_prompt("¿Duele recibir radioterapia?");
        assert!(prompt.contains("¿Duele recibir radioterapia?"));
        assert!(prompt.ends_with("Respuesta en español."));
    }
}

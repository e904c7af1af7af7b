//! Static category → question → answer catalog and its accessor.

mod data;

/// Fixed reply for lookups that match nothing in the catalog.
pub const FALLBACK_ANSWER: &str =
    "Lo siento, no encuentro respuesta para esa pregunta dentro de RADIA.";

/// One authored question with its answer.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A named topic with its questions in display order.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub entries: &'static [Entry],
}

/// The full question catalog. Built once at startup, never mutated, shared
/// read-only across every interaction.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    /// Catalog with the content authored by the radiotherapy service.
    pub fn builtin() -> Self {
        Self::new(data::CATEGORIES)
    }

    pub fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// Category names in display order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    /// Questions of a category in display order. Unknown categories yield an
    /// empty list rather than an error.
    pub fn questions(&self, category: &str) -> Vec<&'static str> {
        self.find(category)
            .map(|c| c.entries.iter().map(|e| e.question).collect())
            .unwrap_or_default()
    }

    /// Every question in the catalog, in category order. Used for
    /// autocompletion of question arguments.
    pub fn all_questions(&self) -> Vec<&'static str> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.question))
            .collect()
    }

    /// Authored answer for a question, or [`FALLBACK_ANSWER`] when either key
    /// is unknown. A question text authored twice within one category
    /// resolves to the first entry.
    pub fn answer(&self, category: &str, question: &str) -> &'static str {
        self.find(category)
            .and_then(|c| c.entries.iter().find(|e| e.question == question))
            .map(|e| e.answer)
            .unwrap_or(FALLBACK_ANSWER)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    fn find(&self, category: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_in_authored_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec![
                "Inicio del tratamiento",
                "Durante el tratamiento",
                "Efectos secundarios y cuidados",
                "Vida diaria y transporte",
                "Sexualidad y fertilidad",
                "Otros aspectos prácticos",
            ]
        );
    }

    #[test]
    fn questions_in_authored_order() {
        let catalog = Catalog::builtin();
        let questions = catalog.questions("Durante el tratamiento");
        assert_eq!(
            questions,
            vec![
                "¿Duele recibir radioterapia?",
                "¿Cuánto dura cada sesión de radioterapia?",
                "¿Puedo moverme durante la sesión?",
                "¿Qué ropa debo usar para venir a la radioterapia?",
            ]
        );
    }

    #[test]
    fn every_authored_pair_has_its_answer() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let questions = catalog.questions(category);
            assert!(!questions.is_empty(), "category {category:?} has no questions");
            for question in questions {
                let answer = catalog.answer(category, question);
                assert_ne!(answer, FALLBACK_ANSWER, "missing answer for {question:?}");
            }
        }
    }

    #[test]
    fn answer_for_selected_pair_is_verbatim() {
        let catalog = Catalog::builtin();
        let answer = catalog.answer("Durante el tratamiento", "¿Duele recibir radioterapia?");
        assert!(answer.starts_with("No. La radioterapia es un tratamiento indoloro."));
    }

    #[test]
    fn unknown_keys_fall_back() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.answer("Durante el tratamiento", "¿?"), FALLBACK_ANSWER);
        assert_eq!(catalog.answer("Tema inexistente", "¿Duele recibir radioterapia?"), FALLBACK_ANSWER);
        assert_eq!(catalog.answer("Tema inexistente", "¿?"), FALLBACK_ANSWER);
    }

    #[test]
    fn unknown_category_lists_no_questions() {
        let catalog = Catalog::builtin();
        assert!(catalog.questions("Tema inexistente").is_empty());
    }

    #[test]
    fn empty_category_is_tolerated() {
        let catalog = Catalog::new(&[Category { name: "Vacía", entries: &[] }]);
        assert_eq!(catalog.categories(), vec!["Vacía"]);
        assert!(catalog.questions("Vacía").is_empty());
        assert_eq!(catalog.answer("Vacía", "¿Algo?"), FALLBACK_ANSWER);
    }

    #[test]
    fn duplicate_question_resolves_to_first_entry() {
        let catalog = Catalog::new(&[Category {
            name: "Tema",
            entries: &[
                Entry { question: "¿Repetida?", answer: "primera" },
                Entry { question: "¿Repetida?", answer: "segunda" },
            ],
        }]);
        assert_eq!(catalog.answer("Tema", "¿Repetida?"), "primera");
    }

    #[test]
    fn builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_count(), 6);
        assert_eq!(catalog.question_count(), 20);
        assert_eq!(catalog.all_questions().len(), 20);
        assert!(!catalog.is_empty());
    }
}

//! Read-aloud affordances for the web embedding of the catalog.
//!
//! The browser owns a single global speech channel: the generated fragment
//! cancels whatever is being spoken before starting its own utterance, so the
//! last activated button always wins.

/// Escape text for embedding inside a single-quoted JavaScript string
/// literal. Backslashes must be escaped before quotes, otherwise the
/// backslash added for a quote would itself get re-escaped. Newlines and
/// carriage returns collapse to spaces; the utterance does not need them.
pub fn escape_utterance(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', " ")
        .replace('\r', " ")
}

/// Build an HTML button that reads `text` aloud via the browser's
/// `speechSynthesis`, in Spanish (es-ES) at default rate, pitch and volume.
/// Returns `None` for empty text: there is nothing to read.
pub fn tts_button(label: &str, text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let safe = escape_utterance(text);

    Some(format!(
        r#"<button onclick="
    var u = new SpeechSynthesisUtterance('{safe}');
    u.lang = 'es-ES';
    window.speechSynthesis.cancel();
    window.speechSynthesis.speak(u);
" style="
    padding:6px 10px;
    margin:4px 4px 8px 0;
    border-radius:999px;
    border:1px solid #d1d5db;
    background:#f3f4f6;
    cursor:pointer;
    font-size:0.85rem;
">
  🔊 {label}
</button>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of the escaping as the browser applies it to a single-quoted
    /// string literal.
    fn decode_js_single_quoted(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('\\') => out.push('\\'),
                    Some('\'') => out.push('\''),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn backslash_is_escaped_before_quote() {
        // A backslash followed by a quote must decode back to itself; quoting
        // first would double-escape the added backslash.
        let escaped = escape_utterance("\\'");
        assert_eq!(escaped, "\\\\\\'");
        assert_eq!(decode_js_single_quoted(&escaped), "\\'");
    }

    #[test]
    fn escaping_round_trips_plain_text() {
        let original = "La radioterapia no duele, pregunta lo que quieras: 'todo bien'.";
        assert_eq!(decode_js_single_quoted(&escape_utterance(original)), original);
    }

    #[test]
    fn newlines_collapse_to_spaces() {
        let escaped = escape_utterance("línea uno\nlínea dos\r\nlínea tres");
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains('\r'));
        assert_eq!(escaped, "línea uno línea dos  línea tres");
    }

    #[test]
    fn empty_text_renders_nothing() {
        assert!(tts_button("Oír esta pregunta", "").is_none());
    }

    #[test]
    fn fragment_cancels_before_speaking_in_spanish() {
        let html = tts_button("Oír esta respuesta", "No duele.").unwrap();
        assert!(html.contains("es-ES"));
        assert!(html.contains("🔊 Oír esta respuesta"));
        let cancel = html.find("speechSynthesis.cancel()").unwrap();
        let speak = html.find("speechSynthesis.speak(u)").unwrap();
        assert!(cancel < speak);
    }

    #[test]
    fn fragment_embeds_escaped_payload() {
        let html = tts_button("Oír", "l'aigua\nfresca").unwrap();
        assert!(html.contains("l\\'aigua fresca"));
        assert!(!html.contains("l'aigua"));
    }
}

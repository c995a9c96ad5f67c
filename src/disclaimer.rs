//! Warnings for words the tagger was unsure about.

use crate::Token;

/// Tokens scored below this are called out to the reader.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.9;

/// One warning per token scored below `threshold`, in sentence order.
pub fn low_confidence_disclaimers(tokens: &[Token], threshold: f64) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.score() < threshold)
        .map(|token| {
            tracing::warn!(
                word = token.text(),
                score = token.score(),
                "low tagging confidence"
            );
            disclaimer_for(token)
        })
        .collect()
}

fn disclaimer_for(token: &Token) -> String {
    format!(
        "Attention : le mot {} a été analysé avec une confiance de {:.0} %, la question peut être incorrecte.",
        token.text().to_uppercase(),
        token.score() * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    #[test]
    fn one_disclaimer_per_uncertain_token() {
        let tokens = vec![
            Token::new("Bonjour", Tag::Intj, 0.85),
            Token::new("je", Tag::Pron, 1.0),
            Token::new("suis", Tag::Aux, 0.99),
            Token::new("content", Tag::Adj, 0.72),
        ];
        let disclaimers = low_confidence_disclaimers(&tokens, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(disclaimers.len(), 2);
        assert!(disclaimers[0].contains("BONJOUR"));
        assert!(disclaimers[1].contains("CONTENT"));
        insta::assert_snapshot!(disclaimers[1], @"Attention : le mot CONTENT a été analysé avec une confiance de 72 %, la question peut être incorrecte.");
    }

    #[test]
    fn confident_tokens_have_no_disclaimers() {
        let tokens = vec![
            Token::new("Tu", Tag::Pron, 0.9),
            Token::new("viens", Tag::Verb, 0.95),
        ];
        assert!(low_confidence_disclaimers(&tokens, DEFAULT_CONFIDENCE_THRESHOLD).is_empty());
    }
}

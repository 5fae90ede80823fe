use super::model::{MaskToken, PlaceholderKind, Template};
use tracing::warn;

pub(super) fn parse_mask(pattern: &str) -> Template {
    let tokens = pattern
        .chars()
        .map(|ch| match placeholder_kind(ch) {
            Some(kind) => MaskToken::Placeholder(kind),
            None => MaskToken::Literal(ch),
        })
        .collect::<Vec<_>>();

    if !tokens.is_empty() && !tokens.iter().any(MaskToken::is_placeholder) {
        // Nothing here could ever consume input.
        warn!(pattern, "mask has no placeholders; masking disabled");
        return Template::empty();
    }

    Template::new(tokens)
}

pub(super) fn placeholder_char(kind: PlaceholderKind) -> char {
    match kind {
        PlaceholderKind::Digit => '9',
        PlaceholderKind::Letter => 'a',
        PlaceholderKind::Any => '#',
    }
}

fn placeholder_kind(ch: char) -> Option<PlaceholderKind> {
    match ch {
        '9' => Some(PlaceholderKind::Digit),
        'a' => Some(PlaceholderKind::Letter),
        '#' => Some(PlaceholderKind::Any),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{MaskToken, PlaceholderKind, Template};

    #[test]
    fn parses_placeholders_and_literals() {
        let template = Template::parse("(9a)#-");
        assert_eq!(
            template.tokens(),
            &[
                MaskToken::Literal('('),
                MaskToken::Placeholder(PlaceholderKind::Digit),
                MaskToken::Placeholder(PlaceholderKind::Letter),
                MaskToken::Literal(')'),
                MaskToken::Placeholder(PlaceholderKind::Any),
                MaskToken::Literal('-'),
            ]
        );
    }

    #[test]
    fn display_reproduces_pattern() {
        let pattern = "+99 (99) 99999-9999";
        assert_eq!(Template::parse(pattern).to_string(), pattern);
    }

    #[test]
    fn literal_only_pattern_disables_masking() {
        assert!(Template::parse("() -").is_empty());
        assert!(Template::parse("").is_empty());
    }

    #[test]
    fn counts_digit_runs() {
        assert_eq!(Template::parse("+99 (99) 9999-9999").digit_runs(), 4);
        assert_eq!(Template::parse("99999").digit_runs(), 1);
        assert_eq!(Template::empty().digit_runs(), 0);
    }
}

//! Catalogue-wide checks over every directive kind

use doxyblock::directive::Warning;
use doxyblock::{Block, Directive, DirectiveKind, Render, TextEmitter};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashSet;

fn render(directive: &Directive, tag: &str) -> String {
    let mut out = TextEmitter::new(80);
    directive.render(tag, &mut out);
    out.into_string()
}

#[rstest]
#[case("@")]
#[case("\\")]
fn test_every_kind_starts_with_tag_and_keyword(#[case] tag: &str) {
    for &kind in DirectiveKind::ALL {
        let directive = Directive::default_for(kind);
        assert_eq!(directive.kind(), kind);

        let output = render(&directive, tag);
        // List directives with no entries write nothing.
        if output.is_empty() {
            assert!(
                matches!(kind, DirectiveKind::Author | DirectiveKind::Authors),
                "{kind:?} rendered nothing"
            );
            continue;
        }
        let prefix = format!("{tag}{}", kind.keyword());
        assert!(
            output.starts_with(&prefix),
            "{kind:?} rendered {output:?}, expected prefix {prefix:?}"
        );
    }
}

#[test]
fn test_every_directive_leaves_indent_balanced() {
    for &kind in DirectiveKind::ALL {
        let block = Block::new().with_directive(Directive::default_for(kind));
        let output = block.render_to_string(80);
        assert!(output.starts_with("/**\n"), "{kind:?}");
        assert!(output.ends_with("*/\n"), "{kind:?} rendered {output:?}");
    }
}

#[test]
fn test_kinds_are_unique() {
    let kinds: HashSet<_> = DirectiveKind::ALL.iter().collect();
    assert_eq!(kinds.len(), DirectiveKind::ALL.len());
}

#[test]
fn test_keywords_are_unique() {
    // Formulas are written with the same `f$` / `f[` markers as the bare symbols.
    let standalone: Vec<_> = DirectiveKind::ALL
        .iter()
        .filter(|k| !matches!(k, DirectiveKind::Formula | DirectiveKind::FormulaBlock))
        .collect();
    let keywords: HashSet<_> = standalone.iter().map(|k| k.keyword()).collect();
    assert_eq!(keywords.len(), standalone.len());
    assert_eq!(DirectiveKind::Formula.keyword(), DirectiveKind::FDollar.keyword());
}

#[test]
fn test_default_directives_round_trip_through_json() {
    for &kind in DirectiveKind::ALL {
        let directive = Directive::default_for(kind);
        let json = serde_json::to_string(&directive).expect("directive to serialize");
        let decoded: Directive = serde_json::from_str(&json).expect("directive to decode");
        assert_eq!(decoded, directive, "{json}");
    }
}

proptest! {
    #[test]
    fn test_directive_once_keeps_first_of_each_kind(
        picks in prop::collection::vec(0..DirectiveKind::ALL.len(), 0..30)
    ) {
        let kinds: Vec<DirectiveKind> = picks.iter().map(|&i| DirectiveKind::ALL[i]).collect();

        let mut block = Block::new();
        for &kind in &kinds {
            block = block.with_directive_once(Directive::default_for(kind));
        }

        let mut expected = Vec::new();
        for kind in kinds {
            if !expected.contains(&kind) {
                expected.push(kind);
            }
        }
        let actual: Vec<_> = block.directives().iter().map(Directive::kind).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_with_directives_preserves_order(texts in prop::collection::vec("[a-z]{1,10}", 0..20)) {
        let block = Block::new().with_directives(texts.iter().map(|t| Warning::new(t.as_str())));
        let output = block.render_to_string(80);

        let mut expected = vec!["/**".to_string()];
        expected.extend(texts.iter().map(|t| format!("\t@warning {t}")));
        expected.push("*/".to_string());
        prop_assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    }
}

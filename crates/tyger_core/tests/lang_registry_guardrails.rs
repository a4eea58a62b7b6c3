use std::collections::HashMap;

use tyger_core::lang::keywords;
use tyger_core::lang::operators;
use tyger_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for (index, info) in keywords::KEYWORDS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "keyword table out of order at {:?}", info.id);
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for (index, info) in operators::OPERATORS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "operator table out of order at {:?}", info.id);
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(operators::as_str(info.id), info.spelling);

        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for (index, info) in punctuation::PUNCTUATION.iter().enumerate() {
        assert_eq!(info.id as usize, index, "punctuation table out of order at {:?}", info.id);
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn token_names_unique_across_registries() {
    let mut seen: HashMap<&'static str, String> = HashMap::new();
    let names = keywords::KEYWORDS
        .iter()
        .map(|k| (k.token_name, format!("{:?}", k.id)))
        .chain(operators::OPERATORS.iter().map(|o| (o.token_name, format!("{:?}", o.id))))
        .chain(punctuation::PUNCTUATION.iter().map(|p| (p.token_name, format!("{:?}", p.id))));

    for (name, owner) in names {
        assert!(
            name.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "token name {name:?} is not upper snake case"
        );
        if let Some(prev) = seen.insert(name, owner.clone()) {
            panic!("duplicate token name {name:?}: {prev} and {owner}");
        }
    }
}

#[test]
fn operator_fixity_matches_grammar() {
    use operators::{Fixity, OperatorId};

    assert_eq!(operators::info_for(OperatorId::Minus).fixity, Fixity::PrefixOrInfix);
    assert!(operators::info_for(OperatorId::Bang).fixity.allows_prefix());
    assert!(!operators::info_for(OperatorId::Bang).fixity.allows_infix());
    assert!(!operators::info_for(OperatorId::Plus).fixity.allows_prefix());
}

#[test]
fn lone_ampersand_and_pipe_are_not_operators() {
    assert_eq!(operators::from_str("&"), None);
    assert_eq!(operators::from_str("|"), None);
    assert_eq!(operators::from_str("&&"), Some(operators::OperatorId::AndAnd));
}

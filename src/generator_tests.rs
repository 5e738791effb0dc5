//! Tests for suggestion generation

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::templates::{AuxiliaryKey, TemplateBundle, TemplateSet, TemplateSource, builtin_bundle};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

fn test_store() -> TemplateStore {
    let bundle = TemplateBundle {
        warm: TemplateSet::new(numbered("warm", 6))
            .with_contextual(Context::Compliment, numbered("thanks", 3)),
        confident: TemplateSet::new(numbered("conf", 2)),
        simple: TemplateSet::new(numbered("base", 7))
            .with_auxiliary(AuxiliaryKey::YesVariants, numbered("yes", 7)),
        smalltalk: TemplateSet::new(numbered("start", 8))
            .with_auxiliary(AuxiliaryKey::Starters, numbered("start", 8)),
        calm: TemplateSet::new(numbered("script", 4))
            .with_auxiliary(AuxiliaryKey::Scripts, numbered("script", 4))
            .with_auxiliary(AuxiliaryKey::QuickCalms, numbered("quick", 5)),
    };
    TemplateStore::with_bundle(bundle, TemplateSource::Builtin)
}

fn all_from(items: &[String], prefix: &str) -> bool {
    items.iter().all(|s| s.starts_with(prefix))
}

#[test]
fn test_warm_draws_four_distinct() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);
    let mut rng = StdRng::seed_from_u64(1);

    let suggestions = generator.generate_with_rng(Mode::Warm, "hello", &mut rng).unwrap();

    assert_eq!(suggestions.len(), 4);
    let unique: HashSet<_> = suggestions.iter().collect();
    assert_eq!(unique.len(), 4);
    assert!(all_from(&suggestions, "warm"));
}

#[test]
fn test_warm_compliment_can_draw_contextual_replies() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);
    let mut rng = StdRng::seed_from_u64(5);

    let mut seen_thanks = false;
    for _ in 0..50 {
        let suggestions = generator
            .generate_with_rng(Mode::Warm, "You did a great job", &mut rng)
            .unwrap();
        seen_thanks |= suggestions.iter().any(|s| s.starts_with("thanks"));
    }
    assert!(seen_thanks);
}

#[test]
fn test_confident_undersized_pool_returns_everything() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);

    let mut suggestions = generator.generate(Mode::Confident, "lunch?").unwrap();
    suggestions.sort();
    assert_eq!(suggestions, strings(&["conf0", "conf1"]));
}

#[test]
fn test_simple_question_draws_yes_variants() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);

    let suggestions = generator.generate(Mode::Simple, "Are you free?").unwrap();
    assert_eq!(suggestions.len(), 5);
    assert!(all_from(&suggestions, "yes"));
}

#[test]
fn test_simple_statement_draws_base() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);

    let suggestions = generator.generate(Mode::Simple, "ok").unwrap();
    assert_eq!(suggestions.len(), 5);
    assert!(all_from(&suggestions, "base"));
}

#[test]
fn test_smalltalk_is_independent_of_input() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);

    let a = generator
        .generate_with_rng(Mode::Smalltalk, "", &mut StdRng::seed_from_u64(9))
        .unwrap();
    let b = generator
        .generate_with_rng(Mode::Smalltalk, "Could you help? great", &mut StdRng::seed_from_u64(9))
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
}

#[test]
fn test_calm_returns_two_scripts_then_three_quick_calms() {
    let store = test_store();
    let generator = SuggestionGenerator::new(&store);

    let suggestions = generator.generate(Mode::Calm, "").unwrap();

    assert_eq!(suggestions.len(), 5);
    assert!(all_from(&suggestions[..2], "script"));
    assert!(all_from(&suggestions[2..], "quick"));
}

#[test]
fn test_calm_undersized_pools_keep_split() {
    let bundle = TemplateBundle {
        calm: TemplateSet::new(strings(&["only script"]))
            .with_auxiliary(AuxiliaryKey::Scripts, strings(&["only script"]))
            .with_auxiliary(AuxiliaryKey::QuickCalms, strings(&["q1", "q2"])),
        ..builtin_bundle()
    };
    let store = TemplateStore::with_bundle(bundle, TemplateSource::Builtin);

    let suggestions = SuggestionGenerator::new(&store).generate(Mode::Calm, "").unwrap();

    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0], "only script");
    assert!(all_from(&suggestions[1..], "q"));
}

#[test]
fn test_generation_before_load_fails() {
    let store = TemplateStore::new();
    let generator = SuggestionGenerator::new(&store);

    for mode in Mode::ALL {
        assert_eq!(generator.generate(mode, "hi"), Err(FriendError::StoreNotLoaded));
    }
}

#[test]
fn test_full_draw_is_permutation_of_pool() {
    let store = test_store();
    let pool = build_pool(&store, Mode::Warm, Context::Compliment, "great").unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let draw = &pool.draws[0];
    let mut drawn = sample(&draw.items, draw.items.len(), &mut rng);
    let mut expected = draw.items.clone();
    drawn.sort();
    expected.sort();
    assert_eq!(drawn, expected);
}

#[test]
fn test_builtin_bundle_serves_every_mode() {
    let store = TemplateStore::with_bundle(builtin_bundle(), TemplateSource::Builtin);
    let generator = SuggestionGenerator::new(&store);

    for mode in Mode::ALL {
        let suggestions = generator.generate(mode, "Want to get coffee?").unwrap();
        assert!(!suggestions.is_empty(), "{} produced nothing", mode);
        assert!(suggestions.len() <= mode.sample_size());
    }
}

#[tokio::test]
async fn test_global_generate_after_load() {
    TemplateStore::global().load(None).await;

    let suggestions = generate(Mode::Smalltalk, "").unwrap();
    assert!(!suggestions.is_empty());
}

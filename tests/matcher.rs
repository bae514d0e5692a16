use fuzzymatch::prelude::*;

fn is_match(text: &str, pattern: &str) -> bool {
    fuzzy_match(text, pattern, false).is_match
}

fn score(text: &str, pattern: &str) -> ScoreType {
    let outcome = fuzzy_match(text, pattern, false);
    assert!(outcome.is_match, "{pattern:?} should match {text:?}");
    outcome.score
}

#[test]
fn empty_inputs() {
    assert_eq!(fuzzy_match("", "", false), MatchOutcome::matched(0));
    assert_eq!(fuzzy_match("anything", "", true), MatchOutcome::matched(0));
    assert_eq!(fuzzy_match("", "abc", false), MatchOutcome::NO_MATCH);
    assert_eq!(MatchOutcome::default(), MatchOutcome::NO_MATCH);
}

#[test]
fn single_characters() {
    assert!(is_match("a", "a"));
    assert!(!is_match("b", "a"));
    assert!(is_match("ab", "b"));
    assert!(is_match("Ab", "b"));
}

#[test]
fn exact_and_prefix() {
    assert!(score("Terminal", "Terminal") > 100);
    assert!(score("Terminal", "Term") > 50);
    assert!(is_match("Terminal", "term"));
}

#[test]
fn case_insensitive_exact() {
    assert!(is_match("Ii", "ii"));
    assert_eq!(score("TERM", "term"), score("term", "term"));
}

#[test]
fn camel_case() {
    assert!(is_match("moduleNameResolver", "mnr"));
    assert!(is_match("getProcessById", "gpb"));
    assert!(is_match("XMLHttpRequest", "xhr"));
}

#[test]
fn word_boundaries() {
    assert!(is_match("my-awesome-plugin", "map"));
    assert!(is_match("user_profile_settings", "ups"));
    assert!(is_match("file.name.extension", "fne"));
}

#[test]
fn diacritics() {
    assert!(is_match("café", "cafe"));
    assert!(is_match("naïve", "naive"));
    assert!(is_match("Müller", "muller"));
    assert!(is_match("Björk", "bjork"));
    assert!(is_match("São Paulo", "sao"));
    assert!(is_match("resume", "résumé"));
    assert_eq!(score("café", "cafe"), score("cafe", "cafe"));
}

#[test]
fn special_characters() {
    assert!(is_match("C++ Programming", "cpro"));
    assert!(is_match("C++ Programming", "prog"));
    assert!(is_match("user@example.com", "user"));
    assert!(is_match("path/to/file.txt", "ptf"));
}

#[test]
fn no_match() {
    assert!(!is_match("Terminal", "xyz"));
    assert!(!is_match("hello", "world"));
    assert!(!is_match("abc", "abcdef"));
}

#[test]
fn lone_character_inside_a_word_is_rejected() {
    assert!(!is_match("abcdefghijklmnop", "h"));
    assert!(is_match("abc hijk", "h"));
}

#[test]
fn match_survives_a_worse_boundary_later() {
    assert_eq!(score("abcxxxx1c", "ac"), 38);
    assert!(score("abxxxxxxxxB", "ab") > 0);
}

#[test]
fn ranking_order() {
    let exact = score("term", "term");
    let prefix = score("Terminal", "term");
    let camel = score("myTerminal", "term");
    assert!(exact > prefix);
    assert!(prefix > camel);

    assert!(score("abcdef", "abc") > score("aXbXcXdef", "abc"));
}

#[test]
fn substring_fallback_scores_lowest() {
    let text = "aaaaaaaaaabcaaaaaaaaaa";
    assert_eq!(fuzzy_match(text, "bc", false), MatchOutcome::matched(2));
}

#[test]
fn idempotent() {
    for (text, pattern) in [("moduleNameResolver", "mnr"), ("Crème brûlée", "creme"), ("你好", "nh")] {
        let first = fuzzy_match(text, pattern, true);
        let second = fuzzy_match(text, pattern, true);
        assert_eq!(first, second, "{text} / {pattern}");
    }
}

#[test]
fn matcher_instances_agree_with_global() {
    let matcher = Matcher::new(Arc::new(NoCache));
    for (text, pattern) in [("Terminal", "term"), ("São Paulo", "sp"), ("支付宝", "zfb"), ("hello", "world")] {
        assert_eq!(
            matcher.fuzzy_match(text, pattern, true),
            fuzzy_match(text, pattern, true),
            "{text} / {pattern}"
        );
    }
}

#[test]
fn shared_between_threads() {
    let matcher = Matcher::default();
    let cases = [
        ("moduleNameResolver", "mnr"),
        ("网易云音乐", "wyyy"),
        ("Müller", "muller"),
        ("你好", "ha"),
        ("path/to/file.txt", "ptf"),
    ];
    let expected: Vec<MatchOutcome> = cases
        .iter()
        .map(|(t, p)| Matcher::new(Arc::new(NoCache)).fuzzy_match(t, p, true))
        .collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    for ((text, pattern), want) in cases.iter().zip(&expected) {
                        assert_eq!(matcher.fuzzy_match(text, pattern, true), *want);
                    }
                }
            });
        }
    });
}

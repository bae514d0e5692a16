use std::num::NonZeroUsize;

use fuzzymatch::pinyin::{MAX_PINYIN_VARIANTS, expand};
use fuzzymatch::prelude::*;
use serial_test::serial;

fn pinyin_match(text: &str, pattern: &str) -> bool {
    fuzzy_match(text, pattern, true).is_match
}

#[test]
fn initials() {
    assert!(pinyin_match("有道词典", "yd"));
    assert!(pinyin_match("有道词典", "ydcd"));
    assert!(pinyin_match("网易云音乐", "wyyy"));
    assert!(pinyin_match("腾讯qq", "tx"));
    assert!(pinyin_match("你好", "nh"));
    assert!(pinyin_match("你好", "n"));
    assert!(pinyin_match("微信", "wx"));
    assert!(pinyin_match("支付宝", "zfb"));
}

#[test]
fn full_syllables() {
    assert!(pinyin_match("你好", "nihao"));
    assert!(pinyin_match("微信", "weixin"));
    assert!(pinyin_match("支付宝", "zhifubao"));
    assert!(pinyin_match("QQ音乐.app", "yinyue"));
    assert!(pinyin_match("网易云音乐", "wangyiyinyue"));
}

#[test]
fn syllables_being_typed() {
    assert!(pinyin_match("你好", "ni"));
    assert!(pinyin_match("你好", "niha"));
    assert!(pinyin_match("网易云音乐", "wangyiyun"));
}

#[test]
fn mixed_initials_and_partial_syllables_are_rejected() {
    assert!(!pinyin_match("你好", "ha"));
    assert!(!pinyin_match("你好", "h"));
    assert!(!pinyin_match("你好", "nih"));
}

#[test]
fn polyphonic_characters() {
    assert!(pinyin_match("银行", "yinhang"));
    assert!(pinyin_match("行走", "xingzou"));
    assert!(pinyin_match("行走", "hangzou"));
}

#[test]
fn transliteration_is_opt_in() {
    assert!(!fuzzy_match("你好", "nh", false).is_match);
    assert!(!fuzzy_match("微信", "weixin", false).is_match);
}

#[test]
fn direct_match_on_han_text() {
    assert!(pinyin_match("日本語テスト", "日本"));
    assert!(fuzzy_match("日本語テスト", "日本", false).is_match);
}

#[test]
fn full_syllables_outrank_initials_prefix() {
    let initials = fuzzy_match("你好", "n", true).score;
    let full = fuzzy_match("你好", "nihao", true).score;
    assert!(full > initials);
}

#[test]
fn expansion_is_bounded() {
    let variants = expand("行行行行行行行行");
    assert!(variants.len() <= MAX_PINYIN_VARIANTS);
    assert!(!variants.is_empty());
}

#[test]
fn cache_policies_agree() {
    let cap = NonZeroUsize::new(2).unwrap();
    let caches: Vec<Arc<dyn PinyinCache>> = vec![
        Arc::new(BoundedCache::new(cap)),
        Arc::new(LruCache::new(cap)),
        Arc::new(NoCache),
    ];
    let cases = [
        ("你好", "nh"),
        ("网易云音乐", "wangyiyinyue"),
        ("QQ音乐.app", "yinyue"),
        ("银行", "yinhang"),
        ("你好", "ha"),
    ];
    let reference = Matcher::new(Arc::new(NoCache));
    for cache in caches {
        let matcher = Matcher::new(cache);
        // twice, so the second round is served from a warm cache
        for _ in 0..2 {
            for (text, pattern) in cases {
                assert_eq!(
                    matcher.fuzzy_match(text, pattern, true),
                    reference.fuzzy_match(text, pattern, true),
                    "{text} / {pattern}"
                );
            }
        }
        assert!(matcher.cache().len() <= 3);
    }
}

#[test]
#[serial]
fn global_matcher_caches_expansions() {
    let cache = default_matcher().cache();
    cache.clear();
    assert!(cache.get("微信").is_none());
    assert!(pinyin_match("微信", "wx"));
    assert!(cache.get("微信").is_some());
}

#[test]
#[serial]
fn global_cache_clear_does_not_change_outcomes() {
    let before = fuzzy_match("支付宝", "zhifubao", true);
    default_matcher().cache().clear();
    assert_eq!(fuzzy_match("支付宝", "zhifubao", true), before);
}

//! Property tests for rule priority and key uniqueness.

use std::collections::HashSet;

use proptest::prelude::*;

use bucketsync::domain::ports::FileLister;
use bucketsync::{FileRule, ManifestBuilder, WalkLister};

use super::common::TestSite;

const FILES: &[&str] = &[
    "index.html",
    "about/index.html",
    "style.css",
    "assets/app.js",
    "assets/app.js.map",
    "assets/img/logo.png",
    "docs/guide.pdf",
    ".well-known/site-association-json",
    "robots.txt",
];

const PATTERNS: &[&str] = &[
    "**",
    "**/*",
    "**/*.html",
    "*.css",
    "assets/**",
    "**/*.{js,css}",
    "docs/*",
    "missing/**",
    ".well-known/*",
];

const IGNORES: &[&str] = &["**/*.map", "assets/img/**", "*.txt", "about/**"];

fn rule_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (
        proptest::collection::vec(0..PATTERNS.len(), 0..3),
        proptest::collection::vec(0..IGNORES.len(), 0..2),
    )
}

fn build_rules(specs: &[(Vec<usize>, Vec<usize>)]) -> Vec<FileRule> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (patterns, ignores))| {
            FileRule::new(patterns.iter().map(|&p| PATTERNS[p]))
                .with_ignore(ignores.iter().map(|&g| IGNORES[g]))
                .with_cache_control(format!("rule-{i}"))
        })
        .collect()
}

fn site() -> TestSite {
    FILES
        .iter()
        .fold(TestSite::new(), |site, file| site.with_file(file, file.as_bytes()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: keys are unique and each belongs to the first declared rule matching it.
    #[test]
    fn property_first_matching_rule_wins(
        specs in proptest::collection::vec(rule_strategy(), 0..5)
    ) {
        let site = site();
        let rules = build_rules(&specs);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let manifest = runtime
            .block_on(ManifestBuilder::new().build(site.root(), &rules, false))
            .unwrap();

        let mut seen = HashSet::new();
        for key in manifest.keys() {
            prop_assert!(seen.insert(key.to_string()), "duplicate key {}", key);
        }

        let compiled: Vec<_> = rules.iter().map(|r| r.compile().unwrap()).collect();
        for file in WalkLister::new().list(site.root()).unwrap() {
            let key = file.key();
            let winner = compiled.iter().position(|set| set.matches(key));
            let asset = manifest.get(key);
            match winner {
                Some(i) => {
                    let asset = asset.expect("matched key missing from manifest");
                    let expected = format!("rule-{i}");
                    prop_assert_eq!(asset.cache_control(), Some(expected.as_str()));
                }
                None => {
                    prop_assert!(asset.is_none(), "unmatched key {} in manifest", key);
                }
            }
        }
    }
}

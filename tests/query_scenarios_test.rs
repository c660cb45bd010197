//! End-to-end scenarios for analysis, expansion, and ranking.

use brickseek::analysis::QueryAnalyzer;
use brickseek::catalog::CatalogRecord;
use brickseek::expand::expand;
use brickseek::rank::{rank, score_record};
use brickseek::vocabulary::Recency;

fn star_wars_set(set_id: &str, year: i32) -> CatalogRecord {
    CatalogRecord::builder()
        .set_id(set_id)
        .name("X-Wing Starfighter")
        .theme("Star Wars")
        .piece_count(700)
        .release_year(year)
        .build()
        .unwrap()
}

#[test]
fn scenario_oldest_star_wars_sets() {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("oldest star wars sets");

    assert_eq!(intent.theme.as_deref(), Some("star wars"));
    assert_eq!(intent.recency, Some(Recency::Oldest));
    assert!(
        !intent.keywords.contains(&"sets".to_string()),
        "domain filler must not survive as a keyword"
    );

    // A 1999 set outranks an otherwise-identical 2015 set.
    let newer = star_wars_set("2015", 2015);
    let older = star_wars_set("1999", 1999);
    let ranked = rank(vec![newer, older], &intent);
    assert_eq!(ranked[0].set_id(), "1999");
}

#[test]
fn scenario_bare_set_number() {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("75192");

    assert_eq!(intent.set_number.as_deref(), Some("75192"));
    assert_eq!(intent.year, None, "a 5-digit run is not a 4-digit year");
    assert_eq!(intent.theme, None);
    // Numeric tokens longer than 2 chars are retained as keywords.
    assert_eq!(intent.keywords, vec!["75192"]);

    let candidates = expand(&intent);
    assert_eq!(candidates, vec!["75192"]);
}

#[test]
fn scenario_empty_query() {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("");

    assert!(intent.is_unstructured());
    // Blank original text is filtered out, leaving no candidates at all.
    assert!(expand(&intent).is_empty());

    // Ranking with an all-absent intent keeps the input order.
    let records = vec![star_wars_set("a", 1999), star_wars_set("b", 2015)];
    let ranked = rank(records.clone(), &intent);
    assert_eq!(ranked, records);
}

#[test]
fn scenario_tied_scores_keep_input_order() {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("star wars");

    let first = star_wars_set("first", 2001);
    let second = star_wars_set("second", 2002);
    assert_eq!(score_record(&first, &intent), score_record(&second, &intent));

    let ranked = rank(vec![first, second], &intent);
    assert_eq!(ranked[0].set_id(), "first");
    assert_eq!(ranked[1].set_id(), "second");
}

#[test]
fn rank_returns_a_permutation() {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("biggest cheap city sets from 1999");

    let records: Vec<CatalogRecord> = (0u32..20)
        .map(|i| {
            CatalogRecord::builder()
                .set_id(format!("{i}"))
                .name(format!("Set {i}"))
                .theme(if i % 2 == 0 { "City" } else { "Technic" })
                .piece_count(i * 150)
                .price(f64::from(i) * 12.5)
                .release_year(1995 + i as i32)
                .build()
                .unwrap()
        })
        .collect();

    let ranked = rank(records.clone(), &intent);
    assert_eq!(ranked.len(), records.len());

    let mut input_ids: Vec<&str> = records.iter().map(|r| r.set_id()).collect();
    let mut ranked_ids: Vec<&str> = ranked.iter().map(|r| r.set_id()).collect();
    input_ids.sort_unstable();
    ranked_ids.sort_unstable();
    assert_eq!(input_ids, ranked_ids);
}

#[test]
fn expansion_is_clean_for_arbitrary_queries() {
    let analyzer = QueryAnalyzer::new();
    let queries = [
        "oldest star wars sets",
        "   padded   query   ",
        "75192",
        "cheap cheap cheap",
        "the and or",
        "newest biggest expensive technic 2021",
    ];

    for query in queries {
        let intent = analyzer.analyze(query);
        let candidates = expand(&intent);

        let mut seen = std::collections::HashSet::new();
        for candidate in &candidates {
            assert!(
                !candidate.trim().is_empty(),
                "blank candidate for query {query:?}"
            );
            assert_eq!(
                candidate.trim(),
                candidate,
                "untrimmed candidate for query {query:?}"
            );
            assert!(
                seen.insert(candidate.clone()),
                "duplicate candidate {candidate:?} for query {query:?}"
            );
        }
    }
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = QueryAnalyzer::new();
    for query in ["oldest star wars sets", "", "75192", "tecnic crane"] {
        assert_eq!(analyzer.analyze(query), analyzer.analyze(query));
    }
}

#[test]
fn canonical_theme_round_trip_scores_theme_points() {
    let analyzer = QueryAnalyzer::new();

    for theme in ["star wars", "city", "technic", "ninjago"] {
        let intent = analyzer.analyze(theme);
        assert_eq!(intent.theme.as_deref(), Some(theme));

        let record = CatalogRecord::builder()
            .set_id("1")
            .name("Anything")
            .theme(theme)
            .piece_count(10)
            .build()
            .unwrap();

        assert!(
            score_record(&record, &intent) >= brickseek::rank::THEME_MATCH_POINTS,
            "theme {theme:?} must earn at least the theme bonus"
        );
    }
}

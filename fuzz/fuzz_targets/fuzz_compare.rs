#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trunfo::{analyze_advanced, compare_by_id, score_all, Card, RawCard, Verdict};

/// Raw numeric fields for one card. Floats may be NaN, infinite, or negative.
#[derive(Arbitrary, Debug)]
struct CardInput {
    population: u32,
    area: f64,
    gdp: f64,
    tourist_spots: u32,
}

/// Structured input for comparison fuzzing.
#[derive(Arbitrary, Debug)]
struct CompareInput {
    first: CardInput,
    second: CardInput,
    /// Attribute selector, including out-of-range values.
    selector: u8,
}

fn build(input: &CardInput) -> Card {
    Card::new(RawCard {
        state: "SP".to_string(),
        code: "FZ".to_string(),
        name: "Fuzz".to_string(),
        population: input.population,
        area: input.area,
        gdp: input.gdp,
        tourist_spots: input.tourist_spots,
    })
}

fuzz_target!(|input: CompareInput| {
    // Unvalidated cards must never panic the rules
    let first = build(&input.first);
    let second = build(&input.second);

    // Single comparison is antisymmetric for any selector
    let forward = compare_by_id(&first, &second, input.selector);
    let backward = compare_by_id(&second, &first, input.selector);
    assert_eq!(forward, backward.swapped(), "selector {}", input.selector);

    if !(1..=6).contains(&input.selector) {
        assert_eq!(forward, Verdict::Tie);
    }

    // Tally always covers six attributes
    let board = score_all(&first, &second);
    assert_eq!(board.total(), 6);

    // Advanced analysis mirrors when the cards are swapped
    let report = analyze_advanced(&first, &second);
    let mirrored = analyze_advanced(&second, &first);
    assert_eq!(report.verdict, mirrored.verdict.swapped());
});

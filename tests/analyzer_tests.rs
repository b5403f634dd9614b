//! Integration tests for the full analysis pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seq_complexity::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_analyzer(iterations: u32, seed: u64) -> Analyzer {
    Analyzer::new(AnalyzerConfig {
        iterations,
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

/// A fresh uniform DNA sequence, independent of any analyzer's RNG streams.
fn random_dna(length: usize, seed: u64) -> String {
    let alphabet = Alphabet::default();
    let mut rng = StdRng::seed_from_u64(seed);
    random::generate(&alphabet, length, &mut rng)
}

// ============================================================================
// Score ranges and signs
// ============================================================================

#[test]
fn percentile_always_in_range() {
    let analyzer = seeded_analyzer(100, 11);
    let sequences = [
        "ATATATATATATATATATATATATATATATATATATATAT",
        "GATGGATCCTAGACGAGGGCCAATATGCTAATGCTAACCT",
        "GCGCCACTATGATCACATGGTGTGATTTGGTGTCATTTGG",
        "TGACGAAAGATGGAAGCGTTGAGGCGTGTCGTGTCAGAAC",
        "A",
        "ACGT",
    ];
    for sequence in sequences {
        let percentile = analyzer.compression_percentile(sequence).unwrap();
        assert!(
            (0.0..=100.0).contains(&percentile),
            "{sequence}: {percentile}"
        );
    }
}

#[test]
fn z_score_finite_for_non_degenerate_distribution() {
    let analyzer = seeded_analyzer(200, 12);
    let z = analyzer
        .compression_z_score("GATGGATCCTAGACGAGGGCCAATATGCTAATGCTAACCT")
        .unwrap();
    assert!(z.is_finite());
}

#[test]
fn repetitive_sequence_scores_as_structured() {
    let analyzer = seeded_analyzer(500, 13);
    let repetitive = "A".repeat(60);

    let percentile = analyzer.compression_percentile(&repetitive).unwrap();
    let z = analyzer.compression_z_score(&repetitive).unwrap();

    assert!(percentile < 2.0, "percentile: {percentile}");
    assert!(z < -3.0, "z: {z}");
}

#[test]
fn random_sequences_average_near_the_median() {
    let analyzer = seeded_analyzer(100, 14);

    let repeats = 30;
    let mut total = 0.0;
    for i in 0..repeats {
        let query = random_dna(80, 1000 + i);
        total += analyzer.compression_percentile(&query).unwrap();
    }
    let mean_percentile = total / repeats as f64;

    // Law of large numbers with a generous tolerance
    assert!(
        (30.0..=70.0).contains(&mean_percentile),
        "mean percentile: {mean_percentile}"
    );
}

// ============================================================================
// Monte Carlo precision
// ============================================================================

#[test]
fn more_iterations_reduce_z_score_variance() {
    let query = "AT".repeat(30);

    let z_variance = |iterations: u32| -> f64 {
        let repeats = 12;
        let zs: Vec<f64> = (0..repeats)
            .map(|i| {
                seeded_analyzer(iterations, 5000 + i)
                    .compression_z_score(&query)
                    .unwrap()
            })
            .collect();
        let mean = zs.iter().sum::<f64>() / zs.len() as f64;
        zs.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / zs.len() as f64
    };

    let coarse = z_variance(20);
    let fine = z_variance(2000);
    assert!(fine < coarse, "var(20 trials)={coarse} var(2000 trials)={fine}");
}

#[test]
fn fixed_seed_yields_fixed_scores_across_analyzers() {
    let query = "GCGCCACTATGATCACATGGTGTGATTTGGTGTCATTTGG";

    let a = seeded_analyzer(100, 77).analyze(query).unwrap();
    let b = seeded_analyzer(100, 77).analyze(query).unwrap();

    assert_eq!(a, b);
}

// ============================================================================
// Validation and errors
// ============================================================================

#[test]
fn invalid_character_reports_symbol_and_position() {
    let analyzer = Analyzer::new(AnalyzerConfig {
        ignore_case: false,
        alphabet: AlphabetSpec::Custom("ACGT".to_string()),
        iterations: 10,
        seed: Some(1),
    })
    .unwrap();

    let err = analyzer.compression_z_score("GAXTT").unwrap_err();
    assert_eq!(
        err,
        ComplexityError::InvalidCharacter {
            symbol: 'X',
            position: 2
        }
    );
}

#[test]
fn case_insensitive_inputs_are_equivalent() {
    let analyzer = seeded_analyzer(100, 15);

    let lower = analyzer.analyze("gattaca").unwrap();
    let upper = analyzer.analyze("GATTACA").unwrap();

    assert_eq!(lower.z_score, upper.z_score);
    assert_eq!(lower.percentile, upper.percentile);
}

#[test]
fn zero_iterations_is_an_error() {
    let result = Analyzer::new(AnalyzerConfig {
        iterations: 0,
        ..Default::default()
    });
    assert_eq!(
        result.err(),
        Some(ComplexityError::InsufficientIterations { requested: 0 })
    );
}

#[test]
fn empty_sequence_is_an_error() {
    let analyzer = seeded_analyzer(10, 16);
    assert_eq!(
        analyzer.compression_z_score("").unwrap_err(),
        ComplexityError::EmptySequence
    );
}

#[test]
fn errors_propagate_unchanged_through_both_operations() {
    let analyzer = seeded_analyzer(10, 17);
    let z_err = analyzer.compression_z_score("ACGU").unwrap_err();
    let p_err = analyzer.compression_percentile("ACGU").unwrap_err();
    assert_eq!(z_err, p_err);
}

// ============================================================================
// Reports and custom compressors
// ============================================================================

#[test]
fn report_serializes_to_json() {
    let analyzer = seeded_analyzer(100, 18);
    let report = analyzer.analyze("GATCCGGGTCCACGAAGTAATAGCGAGCAAGACAGACAGG").unwrap();

    let json = report.to_json().unwrap();
    let restored = AnalysisReport::from_json(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn custom_compressor_is_honored() {
    /// Counts distinct symbols; crude but deterministic and redundancy-aware.
    struct DistinctCount;

    impl Compressor for DistinctCount {
        fn compressed_len(&self, data: &[u8]) -> usize {
            let mut seen = [false; 256];
            for &b in data {
                seen[b as usize] = true;
            }
            seen.iter().filter(|&&s| s).count() + data.len() / 8
        }
    }

    let config = AnalyzerConfig {
        iterations: 50,
        seed: Some(19),
        ..Default::default()
    };
    let analyzer = Analyzer::with_compressor(config, DistinctCount).unwrap();
    let percentile = analyzer.compression_percentile(&"A".repeat(64)).unwrap();

    // One distinct symbol against a four-symbol random baseline
    assert!(percentile < 50.0);
}

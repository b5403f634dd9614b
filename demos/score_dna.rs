//! Score a batch of DNA sequences and print a z-score / percentile table.
//!
//! Run with: cargo run --example score_dna

use seq_complexity::{Analyzer, AnalyzerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = Analyzer::new(AnalyzerConfig {
        iterations: 2000,
        ..Default::default()
    })?;

    let probands = [
        "ATATATATATATATATATATATATATATATATATATATAT",
        "GATGGATCCTAGACGAGGGCCAATATGCTAATGCTAACCT",
        "GCGCCACTATGATCACATGGTGTGATTTGGTGTCATTTGG",
        "GATCCGGGTCCACGAAGTAATAGCGAGCAAGACAGACAGG",
        "TGACGAAAGATGGAAGCGTTGAGGCGTGTCGTGTCAGAAC",
        "ACGATCGATCGATCGATCGATCGATCGATCGATCGATCGC",
        "GGGTGGAGGCGGGAGGGGTGCGGGGGTGGCGGGAGGGGCG",
    ];

    println!("{:<42} {:>8} {:>10}", "sequence", "z", "percentile");
    for proband in probands {
        let report = analyzer.analyze(proband)?;
        println!(
            "{:<42} {:>8.4} {:>10.4}",
            proband, report.z_score, report.percentile
        );
    }

    Ok(())
}

use discourse::{CrossReferencer, GraphBuilder, PaperRecord};

fn sample_papers() -> Vec<PaperRecord> {
    vec![
        PaperRecord::new(
            "kosfeld_2005.pdf",
            "Does intranasal oxytocin increase trust in humans?",
        )
        .with_claim("The original Kosfeld experiment found that oxytocin raised trust")
        .with_evidence("Trust game transfers increased after administration in the first study"),
        PaperRecord::new(
            "replication_2015.pdf",
            "Do the oxytocin trust findings replicate?",
        )
        .with_claim("Attempts to replicate the original trust effect were unsuccessful")
        .with_evidence("A direct replication attempt failed to find the original effect"),
        PaperRecord::new("methods_2018.pdf", "Are plasma oxytocin measurements valid?")
            .with_claim("Common measurement methods overstate oxytocin levels")
            .with_evidence("Plasma measurement without extraction is unreliable")
            .with_evidence("Earlier attempts used unextracted plasma"),
    ]
}

fn main() {
    println!("=== Research Insights Demo: Cross-References & Discourse Graph ===\n");

    let papers = sample_papers();
    println!("Analyzing {} papers\n", papers.len());

    println!("--- Cross-References ---");
    let references = CrossReferencer::default().build(&papers);
    for reference in &references {
        println!("{}: \"{}\"", reference.source_paper, reference.claim);
        for entry in &reference.supporting_evidence {
            println!("  supported by [{}] {}", entry.paper, entry.evidence);
        }
        for entry in &reference.contradicting_evidence {
            println!("  contradicted by [{}] {}", entry.paper, entry.evidence);
        }
    }
    println!("{} cross-references found", references.len());

    println!("\n--- Discourse Graph ---");
    let graph = GraphBuilder::default()
        .build(&papers)
        .expect("sample records all carry filenames");
    println!("{} nodes / {} edges", graph.nodes.len(), graph.edges.len());
    println!(
        "{}",
        serde_json::to_string_pretty(&graph).expect("graph serializes")
    );
}

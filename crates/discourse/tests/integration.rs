use discourse::{
    CrossReferencer, DiscourseError, EdgeKind, GraphBuilder, NodeIdentity, NodeKind, PaperRecord,
};

fn corpus() -> Vec<PaperRecord> {
    vec![
        PaperRecord::new("kosfeld_2005.pdf", "Does oxytocin increase trust in humans?")
            .with_claim("The original Kosfeld experiment raised trust")
            .with_evidence("Trust transfers rose in the trust game"),
        PaperRecord::new("replication_2015.pdf", "Do the oxytocin trust findings replicate?")
            .with_claim("Attempts to replicate the trust effect were unsuccessful")
            .with_evidence("A direct replication attempt failed to find the original effect"),
        PaperRecord::new("methods_2018.pdf", "Are plasma oxytocin assays valid?")
            .with_evidence("Plasma measurement without extraction is unreliable")
            .with_evidence("Earlier attempts used unextracted plasma"),
    ]
}

#[test]
fn node_count_matches_input_sizes() {
    // Distinct texts everywhere, so no aliasing: one question node per
    // paper plus one node per claim and per evidence string.
    let papers = corpus();
    let expected: usize = papers
        .iter()
        .map(|p| 1 + p.claims.len() + p.evidence.len())
        .sum();

    let graph = GraphBuilder::default().build(&papers).unwrap();
    assert_eq!(graph.nodes.len(), expected);

    // Ids are sequential and unique.
    for (i, node) in graph.nodes.iter().enumerate() {
        assert_eq!(node.id, i);
    }
}

#[test]
fn graph_build_is_idempotent() {
    let papers = corpus();
    let builder = GraphBuilder::default();
    assert_eq!(builder.build(&papers).unwrap(), builder.build(&papers).unwrap());

    let referencer = CrossReferencer::default();
    assert_eq!(referencer.build(&papers), referencer.build(&papers));
}

#[test]
fn supporting_and_contradicting_edges_point_at_the_claim() {
    let graph = GraphBuilder::default().build(&corpus()).unwrap();

    let contradicts: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Contradicts)
        .collect();
    assert_eq!(contradicts.len(), 1);
    assert_eq!(graph.nodes[contradicts[0].source].kind, NodeKind::Evidence);
    assert_eq!(graph.nodes[contradicts[0].target].kind, NodeKind::Claim);
    assert_eq!(graph.nodes[contradicts[0].target].paper, "kosfeld_2005.pdf");

    let supports: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Supports)
        .collect();
    assert_eq!(supports.len(), 1);
    assert_eq!(graph.nodes[supports[0].source].paper, "methods_2018.pdf");
    assert_eq!(graph.nodes[supports[0].target].paper, "replication_2015.pdf");
}

#[test]
fn marker_free_negation_reads_as_support() {
    // "No social interaction effect was found" carries none of the
    // negative markers as a substring, so the edge comes out `supports`.
    let papers = vec![
        PaperRecord::new("p1.pdf", "q1").with_claim("Social contact reduces cortisol"),
        PaperRecord::new("p2.pdf", "q2").with_evidence("No social interaction effect was found"),
    ];
    let graph = GraphBuilder::default().build(&papers).unwrap();

    // p1: question(0), claim(1); p2: question(2), evidence(3)
    assert_eq!(graph.nodes.len(), 4);
    assert!(graph
        .edges
        .iter()
        .any(|e| e.kind == EdgeKind::Supports && e.source == 3 && e.target == 1));
    assert!(graph.edges.iter().all(|e| e.kind != EdgeKind::Contradicts));
}

#[test]
fn identical_text_aliases_to_the_last_writer() {
    let papers = vec![
        PaperRecord::new("a.pdf", "qa").with_claim("A replication attempt was made"),
        PaperRecord::new("b.pdf", "qb").with_evidence("Identical replication attempt data"),
        PaperRecord::new("c.pdf", "qc").with_evidence("Identical replication attempt data"),
    ];

    // a: question(0), claim(1); b: question(2), evidence(3);
    // c: question(4), evidence(5). The shared text maps to node 5.
    let graph = GraphBuilder::default().build(&papers).unwrap();
    let supports: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Supports)
        .collect();

    // Both cross-reference entries resolve to c's node; b's evidence node
    // ends up unreferenced.
    assert_eq!(supports.len(), 2);
    assert!(supports.iter().all(|e| e.source == 5 && e.target == 1));
    assert!(graph.edges.iter().all(|e| e.source != 3));
}

#[test]
fn by_paper_identity_keeps_duplicate_text_distinct() {
    let papers = vec![
        PaperRecord::new("a.pdf", "qa").with_claim("A replication attempt was made"),
        PaperRecord::new("b.pdf", "qb").with_evidence("Identical replication attempt data"),
        PaperRecord::new("c.pdf", "qc").with_evidence("Identical replication attempt data"),
    ];

    let graph = GraphBuilder::default()
        .with_identity(NodeIdentity::ByPaperAndText)
        .build(&papers)
        .unwrap();

    let mut sources: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Supports)
        .map(|e| e.source)
        .collect();
    sources.sort_unstable();
    assert_eq!(sources, vec![3, 5]);
}

#[test]
fn missing_filename_fails_with_the_record_index() {
    let mut papers = corpus();
    papers[2].filename.clear();

    let err = GraphBuilder::default().build(&papers).unwrap_err();
    let DiscourseError::MissingField { record, field } = err;
    assert_eq!((record, field), (2, "filename"));
}

#[test]
fn cross_references_never_include_the_source_paper() {
    let references = CrossReferencer::default().build(&corpus());
    assert!(!references.is_empty());
    for reference in &references {
        for entry in reference
            .supporting_evidence
            .iter()
            .chain(&reference.contradicting_evidence)
        {
            assert_ne!(entry.paper, reference.source_paper);
        }
    }
}

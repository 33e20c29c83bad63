/// Shared fixtures for integration tests
///
/// The Hominidae tree mirrors `fixtures/hominidae.json`; the gene list mirrors
/// `fixtures/gene_reports.json`.
use datasets_digest::bio::{GeneRecord, ProteinRecord, SeqRange, TaxonNode, TaxonomicRank, TranscriptRecord};
use std::path::PathBuf;

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn hominidae() -> TaxonNode {
    use TaxonomicRank::*;

    TaxonNode::new(9604, "Hominidae", Family)
        .with_common_name("great apes")
        .with_children([
            TaxonNode::new(207598, "Homininae", Subfamily).with_children([
                TaxonNode::new(9605, "Homo", Genus).with_children([
                    TaxonNode::new(9606, "Homo sapiens", Species)
                        .with_common_name("human")
                        .with_child(
                            TaxonNode::new(63221, "Homo sapiens neanderthalensis", Subspecies)
                                .with_common_name("Neanderthal"),
                        ),
                    TaxonNode::new(1425170, "Homo heidelbergensis", Species),
                ]),
                TaxonNode::new(9596, "Pan", Genus).with_children([
                    TaxonNode::new(9598, "Pan troglodytes", Species).with_common_name("chimpanzee"),
                    TaxonNode::new(9597, "Pan paniscus", Species)
                        .with_common_name("pygmy chimpanzee"),
                ]),
                TaxonNode::new(9592, "Gorilla", Genus).with_child(
                    TaxonNode::new(9593, "Gorilla gorilla", Species)
                        .with_common_name("western gorilla"),
                ),
            ]),
            TaxonNode::new(607660, "Ponginae", Subfamily).with_child(
                TaxonNode::new(9599, "Pongo", Genus).with_child(
                    TaxonNode::new(9601, "Pongo abelii", Species)
                        .with_common_name("Sumatran orangutan"),
                ),
            ),
            TaxonNode::unranked(2665953, "unclassified Hominidae"),
        ])
}

#[allow(dead_code)]
pub fn gene_reports() -> Vec<GeneRecord> {
    let mut ace2 = GeneRecord::new(59272, "ACE2", "Homo sapiens")
        .with_chromosome("X")
        .with_transcript(
            TranscriptRecord::new("NM_021804.3", 3339)
                .with_name("transcript variant 1")
                .with_cds(308, 2725)
                .with_exons([SeqRange::new(1, 307), SeqRange::new(308, 3339)])
                .with_protein(
                    ProteinRecord::new("NP_068576.1")
                        .with_isoform("isoform 1")
                        .with_length(805),
                ),
        )
        .with_transcript(
            TranscriptRecord::new("NM_001371415.1", 3360)
                .with_name("transcript variant 2")
                .with_cds(329, 2746)
                .with_exons([SeqRange::new(1, 328), SeqRange::new(329, 3360)])
                .with_protein(ProteinRecord::new("NP_001358344.1").with_length(805)),
        );
    ace2.tax_id = Some(9606);
    ace2.swiss_prot_accessions = vec!["Q9BYF1".to_string()];
    ace2.ensembl_gene_ids = vec!["ENSG00000130234".to_string()];

    let mut malat1 = GeneRecord::new(378938, "MALAT1", "Homo sapiens")
        .with_chromosome("11")
        .with_transcript(
            TranscriptRecord::new("NR_002819.4", 8708)
                .with_name("transcript variant 1")
                .with_exons([SeqRange::new(1, 8708)]),
        );
    malat1.tax_id = Some(9606);

    let mut mir = GeneRecord::new(100302278, "MIR1302-2", "Homo sapiens").with_chromosome("1");
    mir.tax_id = Some(9606);

    vec![ace2, malat1, mir]
}

//! First-run reference data.

use tracing::info;

use docshelf_core::result::AppResult;
use docshelf_core::types::{FolderPath, TagId};
use docshelf_entity::document::{CreateDocument, DocumentKind, PaperMetadata};
use docshelf_entity::tag::Tag;

use crate::keys;
use crate::store::DocumentStore;

/// Seed the default tags and a small paper library on first run.
///
/// A store that has ever held a live collection is left alone, even if
/// the collection is currently empty: an empty library the user emptied
/// on purpose must stay empty. Returns whether seeding happened.
pub async fn seed_if_empty(store: &DocumentStore) -> AppResult<bool> {
    if store.kv.contains(&keys::live_documents()).await? {
        return Ok(false);
    }

    let tags = store.tags.ensure_defaults().await?;
    let papers = sample_papers(&tags);
    let count = papers.len();
    for paper in papers {
        store.create(paper).await?;
    }

    info!(documents = count, "Sample library seeded");
    Ok(true)
}

fn tag_ids(tags: &[Tag], names: &[&str]) -> Vec<TagId> {
    names
        .iter()
        .filter_map(|name| tags.iter().find(|t| t.name == *name).map(|t| t.id))
        .collect()
}

fn sample_papers(tags: &[Tag]) -> Vec<CreateDocument> {
    let shelf = FolderPath::from_segments(["Research Papers"]);
    let paper = |name: &str,
                 year: i32,
                 authors: &[&str],
                 abstract_text: &str,
                 size_bytes: u64,
                 tag_names: &[&str]| CreateDocument {
        name: name.to_string(),
        kind: DocumentKind::Pdf,
        size_bytes: Some(size_bytes),
        tags: tag_ids(tags, tag_names),
        path: shelf.clone(),
        paper: Some(PaperMetadata {
            authors: authors.iter().map(|a| a.to_string()).collect(),
            abstract_text: abstract_text.to_string(),
            publication_year: year,
        }),
        ..CreateDocument::default()
    };

    let mut papers = vec![
        paper(
            "Scalable Overlay Networks for Peer Discovery.pdf",
            2004,
            &["Okafor, N.", "Lindqvist, A."],
            "Evaluates gossip-based overlay construction for peer discovery \
             under churn, with a membership protocol that bounds fan-out.",
            412_388,
            &["Research", "Methodology"],
        ),
        paper(
            "Cache-Conscious Index Structures for Flash Storage.pdf",
            2009,
            &["Huang, W.", "Da Silva, R.", "Meier, K."],
            "Measures B-tree variants on early SSDs and proposes a \
             write-coalescing node layout that narrows the read/write gap.",
            688_104,
            &["Research", "Results"],
        ),
        paper(
            "A Survey of Consensus Protocols in Unreliable Networks.pdf",
            2012,
            &["Bhatt, P."],
            "Surveys quorum- and leader-based consensus families and maps \
             their liveness guarantees onto partially synchronous networks.",
            1_204_770,
            &["Research", "Literature"],
        ),
        paper(
            "Energy-Aware Scheduling on Heterogeneous Clusters.pdf",
            2015,
            &["Novak, T.", "Eriksson, M."],
            "A scheduler that trades tail latency for energy by steering \
             batch work onto low-power cores during demand troughs.",
            534_902,
            &["Research", "Discussion"],
        ),
        paper(
            "Differential Privacy in Streaming Telemetry.pdf",
            2017,
            &["Castillo, M.", "Obi, C."],
            "Applies budgeted noise injection to sliding-window telemetry \
             aggregates and quantifies the accuracy loss at scale.",
            821_556,
            &["Research", "Important"],
        ),
        paper(
            "Learned Compression for Columnar Archives.pdf",
            2019,
            &["Yamada, S.", "Kovács, B."],
            "Trains per-column models to predict value distributions and \
             reports compression ratios against dictionary baselines.",
            973_310,
            &["Research", "Results"],
        ),
    ];

    papers[2].starred = true;
    papers[4].notes = Some("Cited in the related-work section.".to_string());
    papers
}

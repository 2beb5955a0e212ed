//! Case-insensitive search over the live collection.

use docshelf_core::result::AppResult;
use docshelf_entity::document::Document;
use docshelf_entity::tag::Tag;

use crate::store::DocumentStore;

impl DocumentStore {
    /// Live documents matching `query` in name, tag names, or notes.
    ///
    /// Substring match, case-insensitive, results in stored order. An
    /// empty query matches everything. Trashed documents never match.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Document>> {
        let live = self.load_live().await?;
        let tags = self.tags.list().await?;
        let needle = query.to_lowercase();
        Ok(live
            .into_iter()
            .filter(|d| matches_document(d, &needle, &tags))
            .collect())
    }

    /// Live documents carrying paper metadata.
    pub async fn list_papers(&self) -> AppResult<Vec<Document>> {
        let live = self.load_live().await?;
        Ok(live.into_iter().filter(|d| d.paper.is_some()).collect())
    }

    /// Search papers, optionally restricted to a publication year.
    ///
    /// Matches the document fields plus authors and abstract.
    pub async fn search_papers(
        &self,
        query: &str,
        year: Option<i32>,
    ) -> AppResult<Vec<Document>> {
        let live = self.load_live().await?;
        let tags = self.tags.list().await?;
        let needle = query.to_lowercase();
        Ok(live
            .into_iter()
            .filter(|d| {
                let Some(paper) = &d.paper else {
                    return false;
                };
                if !year.map_or(true, |y| paper.publication_year == y) {
                    return false;
                }
                matches_document(d, &needle, &tags) || matches_paper(paper, &needle)
            })
            .collect())
    }
}

fn matches_document(doc: &Document, needle: &str, tags: &[Tag]) -> bool {
    if doc.name.to_lowercase().contains(needle) {
        return true;
    }
    if doc
        .notes
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(needle))
    {
        return true;
    }
    doc.tags.iter().any(|id| {
        tags.iter()
            .any(|t| t.id == *id && t.name.to_lowercase().contains(needle))
    })
}

fn matches_paper(paper: &docshelf_entity::document::PaperMetadata, needle: &str) -> bool {
    paper
        .authors
        .iter()
        .any(|a| a.to_lowercase().contains(needle))
        || paper.abstract_text.to_lowercase().contains(needle)
}

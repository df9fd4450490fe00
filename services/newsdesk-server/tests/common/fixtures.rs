// Test fixtures: documents and content snapshots

use newsdesk::core::store::MemoryContentStore;
use newsdesk::core::types::{
    parse_date, Body, Document, DocumentFields, Editorial, ExternalLink, ScoredDocument,
};

/// Article with a primary category
#[allow(dead_code)]
pub fn article(id: &str, title: &str, author: &str, category: &str, date: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        quote: String::new(),
        date: parse_date(date),
        body: Body::Plain(format!("{title}. Full story by {author}.")),
        fields: DocumentFields::Article(Editorial {
            primary_category: category.to_string(),
            ..Default::default()
        }),
    }
}

/// Opinion piece (no categories)
#[allow(dead_code)]
pub fn opinion(id: &str, title: &str, author: &str, date: &str) -> Document {
    Document {
        fields: DocumentFields::Opinion(Editorial::default()),
        ..article(id, title, author, "", date)
    }
}

/// External link with a category
#[allow(dead_code)]
pub fn external(id: &str, title: &str, category: &str, date: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        author: String::new(),
        quote: String::new(),
        date: parse_date(date),
        body: Body::Plain(String::new()),
        fields: DocumentFields::External(ExternalLink {
            category: category.to_string(),
            url: Some(format!("https://wire.example.com/{id}")),
        }),
    }
}

/// Replace the tags of an editorial document
#[allow(dead_code)]
pub fn with_tags(mut doc: Document, tags: &[&str]) -> Document {
    if let DocumentFields::Article(e) | DocumentFields::Opinion(e) = &mut doc.fields {
        e.tags = tags.iter().map(|t| t.to_string()).collect();
    }
    doc
}

/// Ids of results, in order
#[allow(dead_code)]
pub fn ids(results: &[ScoredDocument]) -> Vec<String> {
    results.iter().map(|r| r.document.id.clone()).collect()
}

/// A small newsroom: economy and politics coverage across all kinds
#[allow(dead_code)]
pub fn newsroom_snapshot() -> MemoryContentStore {
    let articles = vec![
        article("doc1", "Tax Reform Passes", "J. Doe", "Economy", "2024-01-10"),
        with_tags(
            article("doc2", "Weather Update", "A. Smith", "News", "2024-02-01"),
            &["economy"],
        ),
        article("doc3", "Economy grows in Q2", "B. Smith", "Politics", "2024-07-15"),
        article("doc4", "Election night", "C. Jones", "Politics", "2024-06-20"),
        opinion("op1", "The economy needs courage", "D. Smith", "2024-06-05"),
        article("doc5", "Undated economy brief", "", "Economy", ""),
    ];
    let links = vec![
        external("x1", "Economy live blog", "Economy", "2024-03-01"),
        external("x2", "Cup final report", "Sport", "2024-05-11"),
    ];

    MemoryContentStore::new()
        .with_collection("articles", articles)
        .with_collection("external-links", links)
}

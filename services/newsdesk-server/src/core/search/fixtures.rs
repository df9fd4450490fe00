//! Document builders shared by the search unit tests.

use crate::core::types::{
    parse_date, Body, Document, DocumentFields, Editorial, ExternalLink, ScoredDocument,
};

pub fn article(id: &str, title: &str, author: &str, category: &str, date: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        quote: String::new(),
        date: parse_date(date),
        body: Body::default(),
        fields: DocumentFields::Article(Editorial {
            primary_category: category.to_string(),
            ..Default::default()
        }),
    }
}

pub fn opinion(id: &str, title: &str, author: &str, date: &str) -> Document {
    let mut doc = article(id, title, author, "", date);
    if let DocumentFields::Article(editorial) = doc.fields {
        doc.fields = DocumentFields::Opinion(editorial);
    }
    doc
}

pub fn external(id: &str, title: &str, category: &str, date: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        author: String::new(),
        quote: String::new(),
        date: parse_date(date),
        body: Body::default(),
        fields: DocumentFields::External(ExternalLink {
            category: category.to_string(),
            url: None,
        }),
    }
}

pub fn scored(document: Document, score: u32) -> ScoredDocument {
    ScoredDocument {
        document,
        score,
        preview: String::new(),
    }
}

pub fn ids(results: &[ScoredDocument]) -> Vec<&str> {
    results.iter().map(|r| r.document.id.as_str()).collect()
}

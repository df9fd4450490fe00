//! CMS payload parsing and normalization.
//!
//! Collection endpoints answer with `{ "docs": [...], "totalDocs": n, ... }`.
//! Item shapes vary between collections and CMS versions: relations
//! may be ids or populated objects, tags may be strings or `{tag}`
//! rows, bodies may be a Lexical tree, a Slate node list or a plain
//! string. Everything is reduced to [`Document`] here.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::config::SourceConfig;
use crate::core::types::{
    parse_date, Body, Document, DocumentFields, Editorial, ExternalLink, RichTextNode,
    SearchDomain,
};

/// Fields searched upstream for editorial collections
pub const EDITORIAL_SEARCH_FIELDS: &[&str] = &[
    "title",
    "quote",
    "content",
    "author.name",
    "category.name",
    "secondaryCategory.name",
    "tags.tag",
];

/// Fields searched upstream for external-link collections
pub const EXTERNAL_SEARCH_FIELDS: &[&str] = &["title", "quote", "body", "author", "category"];

/// Searchable upstream fields for a domain
pub fn search_fields(domain: SearchDomain) -> &'static [&'static str] {
    match domain {
        SearchDomain::Articles => EDITORIAL_SEARCH_FIELDS,
        SearchDomain::External => EXTERNAL_SEARCH_FIELDS,
    }
}

/// List envelope returned by collection endpoints.
///
/// Upstream pagination is parsed for logging only; paging happens
/// engine-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub docs: Vec<Value>,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

/// Normalize every item of a list response, dropping items without id
pub fn normalize_all(items: Vec<Value>, source: &SourceConfig) -> Vec<Document> {
    items
        .iter()
        .filter_map(|item| {
            let doc = normalize(item, source);
            if doc.is_none() {
                tracing::debug!(collection = %source.collection, "skipping item without id");
            }
            doc
        })
        .collect()
}

/// Normalize a single raw item.
///
/// Returns `None` when the item is not an object or has no id.
pub fn normalize(item: &Value, source: &SourceConfig) -> Option<Document> {
    let obj = item.as_object()?;

    let id = match obj.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => text_of(other),
        None => String::new(),
    };
    if id.is_empty() {
        return None;
    }

    let title = field_text(obj, &["title"]);
    let author = field_text(obj, &["author", "authorName"]);
    let quote = field_text(obj, &["quote", "excerpt"]);
    let date = first(obj, &["date", "publishedDate", "publishDate"])
        .and_then(Value::as_str)
        .and_then(parse_date);
    let body = first(obj, &["content", "body"])
        .map(body_of)
        .unwrap_or_default();

    let fields = match source.domain {
        SearchDomain::External => DocumentFields::External(ExternalLink {
            category: field_text(obj, &["category"]),
            url: optional_text(obj, &["url", "link"]),
        }),
        SearchDomain::Articles => {
            let editorial = Editorial {
                primary_category: field_text(obj, &["category", "primaryCategory"]),
                secondary_category: field_text(obj, &["secondaryCategory"]),
                tags: first(obj, &["tags"]).map(tags_of).unwrap_or_default(),
                slug: optional_text(obj, &["slug"]),
            };
            if source.opinion || is_opinion(obj) {
                DocumentFields::Opinion(editorial)
            } else {
                DocumentFields::Article(editorial)
            }
        }
    };

    Some(Document {
        id,
        title,
        author,
        quote,
        date,
        body,
        fields,
    })
}

fn is_opinion(obj: &Map<String, Value>) -> bool {
    if obj.get("isOpinion").and_then(Value::as_bool) == Some(true) {
        return true;
    }
    first(obj, &["type", "kind", "articleType"])
        .and_then(Value::as_str)
        .is_some_and(|t| t.trim().eq_ignore_ascii_case("opinion"))
}

fn first<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn field_text(obj: &Map<String, Value>, keys: &[&str]) -> String {
    first(obj, keys).map(text_of).unwrap_or_default()
}

fn optional_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    Some(field_text(obj, keys)).filter(|s| !s.is_empty())
}

/// Display text of a string or populated relation.
///
/// Unpopulated relations (bare ids) and other shapes yield an empty
/// string.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Object(obj) => ["name", "title", "label", "tag", "value"]
            .iter()
            .filter_map(|k| obj.get(*k))
            .find_map(|v| v.as_str().map(|s| s.trim().to_string()))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn tags_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(text_of)
            .filter(|t| !t.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn body_of(value: &Value) -> Body {
    match value {
        Value::String(s) => Body::Plain(s.clone()),
        // Lexical: { "root": { "children": [...] } }
        Value::Object(obj) => match obj.get("root") {
            Some(root) => Body::RichText(vec![node_of(root)]),
            None => Body::RichText(vec![node_of(value)]),
        },
        // Slate: [ { "type": "p", "children": [...] } ]
        Value::Array(nodes) => Body::RichText(nodes.iter().map(node_of).collect()),
        _ => Body::default(),
    }
}

fn node_of(value: &Value) -> RichTextNode {
    let Some(obj) = value.as_object() else {
        return RichTextNode::default();
    };

    let children: Vec<RichTextNode> = obj
        .get("children")
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(node_of).collect())
        .unwrap_or_default();

    let inline = matches!(
        obj.get("type").and_then(Value::as_str),
        Some("text" | "link" | "autolink" | "linebreak")
    );

    RichTextNode {
        text: obj.get("text").and_then(Value::as_str).map(str::to_string),
        block: !children.is_empty() && !inline,
        children,
    }
}

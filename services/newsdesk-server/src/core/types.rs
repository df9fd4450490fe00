//! Core data types for the Newsdesk search service.
//!
//! This module defines the normalized document model, search
//! requests, and the response shapes returned by the engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::SearchConfig;
use crate::core::error::{NewsdeskError, Result};

/// Concrete kind of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Article,
    Opinion,
    External,
}

impl DocumentKind {
    /// Search domain this kind belongs to
    pub fn domain(self) -> SearchDomain {
        match self {
            DocumentKind::Article | DocumentKind::Opinion => SearchDomain::Articles,
            DocumentKind::External => SearchDomain::External,
        }
    }
}

/// Content partition being searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDomain {
    /// Articles and opinion pieces
    #[default]
    Articles,
    /// Syndicated external links
    External,
}

impl SearchDomain {
    /// Parse a `searchType` value. Anything other than `external`
    /// selects the articles domain.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("external") {
            SearchDomain::External
        } else {
            SearchDomain::Articles
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchDomain::Articles => "articles",
            SearchDomain::External => "external",
        }
    }
}

impl std::fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by articles and opinion pieces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub primary_category: String,
    pub secondary_category: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Fields of a syndicated external link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Kind-specific document fields, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentFields {
    Article(Editorial),
    Opinion(Editorial),
    External(ExternalLink),
}

/// A node of a rich-text body tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichTextNode {
    /// Leaf text, if this node carries any
    pub text: Option<String>,

    /// Nested nodes
    pub children: Vec<RichTextNode>,

    /// Block-level nodes (paragraphs, headings) separate words
    pub block: bool,
}

/// Document body, used only for preview text
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    RichText(Vec<RichTextNode>),
    Plain(String),
}

impl Default for Body {
    fn default() -> Self {
        Body::Plain(String::new())
    }
}

impl Body {
    /// Flatten the body into whitespace-normalized plain text
    pub fn plain_text(&self) -> String {
        let raw = match self {
            Body::Plain(text) => text.clone(),
            Body::RichText(nodes) => {
                let mut out = String::new();
                for node in nodes {
                    collect_text(node, &mut out);
                }
                out
            }
        };

        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Plain-text excerpt of at most `max_chars` characters.
    ///
    /// Truncated excerpts end with an ellipsis. Character-based, so
    /// multi-byte text never splits inside a code point.
    pub fn preview(&self, max_chars: usize) -> String {
        let text = self.plain_text();
        if text.chars().count() <= max_chars {
            return text;
        }

        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

fn collect_text(node: &RichTextNode, out: &mut String) {
    if let Some(text) = &node.text {
        out.push_str(text);
    }
    for child in &node.children {
        collect_text(child, out);
    }
    if node.block {
        out.push(' ');
    }
}

/// A candidate search result, normalized at the content store boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Identifier, unique within its domain
    pub id: String,

    pub title: String,

    /// Author display name (empty when absent)
    pub author: String,

    /// Pull-quote or excerpt (empty when absent)
    pub quote: String,

    /// Publication date
    pub date: Option<DateTime<Utc>>,

    /// Body tree, never serialized
    #[serde(skip)]
    pub body: Body,

    #[serde(flatten)]
    pub fields: DocumentFields,
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self.fields {
            DocumentFields::Article(_) => DocumentKind::Article,
            DocumentFields::Opinion(_) => DocumentKind::Opinion,
            DocumentFields::External(_) => DocumentKind::External,
        }
    }

    pub fn domain(&self) -> SearchDomain {
        self.kind().domain()
    }

    /// Editorial fields for articles and opinion pieces
    pub fn editorial(&self) -> Option<&Editorial> {
        match &self.fields {
            DocumentFields::Article(e) | DocumentFields::Opinion(e) => Some(e),
            DocumentFields::External(_) => None,
        }
    }

    /// Link fields for external documents
    pub fn external(&self) -> Option<&ExternalLink> {
        match &self.fields {
            DocumentFields::External(link) => Some(link),
            _ => None,
        }
    }

    /// Publication time in epoch milliseconds, 0 when missing
    pub fn timestamp_millis(&self) -> i64 {
        self.date.map(|d| d.timestamp_millis()).unwrap_or(0)
    }
}

/// A document with its relevance score and preview text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,

    /// Additive relevance score, always >= 1
    pub score: u32,

    /// Plain-text body excerpt
    #[serde(default)]
    pub preview: String,
}

/// Result ordering strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Relevance,
    #[default]
    DateDesc,
    DateAsc,
    AuthorAsc,
}

impl SortBy {
    /// Parse a `sortBy` value. Unrecognized values fall back to
    /// `date_desc`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "relevance" => SortBy::Relevance,
            "date_asc" => SortBy::DateAsc,
            "author_asc" => SortBy::AuthorAsc,
            _ => SortBy::DateDesc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::DateDesc => "date_desc",
            SortBy::DateAsc => "date_asc",
            SortBy::AuthorAsc => "author_asc",
        }
    }
}

/// Structured filters, all optional and AND-composed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// Raw query-string parameters of `GET /api/search`
///
/// Everything is kept as a string so malformed numbers degrade to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub search_type: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// A normalized search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Free-text query (validated by the engine)
    pub query: String,
    pub domain: SearchDomain,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub sort_by: SortBy,
    pub filters: SearchFilters,
}

impl SearchRequest {
    /// Request with default paging, sorting and no filters
    pub fn new(query: impl Into<String>, domain: SearchDomain) -> Self {
        Self {
            query: query.into(),
            domain,
            page: 1,
            page_size: SearchConfig::default().default_page_size,
            sort_by: SortBy::default(),
            filters: SearchFilters::default(),
        }
    }

    /// Build a request from query-string parameters.
    ///
    /// Page numbers and sizes are coerced to positive integers,
    /// falling back to defaults; `page_size` is clamped to
    /// `max_page_size`.
    ///
    /// # Errors
    ///
    /// - `Validation`: a date filter is present but not a date
    pub fn from_params(params: SearchParams, config: &SearchConfig) -> Result<Self> {
        let page = coerce_positive(params.page.as_deref(), 1);
        let page_size = coerce_positive(params.page_size.as_deref(), config.default_page_size)
            .min(config.max_page_size);

        let filters = SearchFilters {
            date_from: parse_date_param("dateFrom", params.date_from.as_deref())?,
            date_to: parse_date_param("dateTo", params.date_to.as_deref())?,
            author: non_empty(params.author),
            category: non_empty(params.category),
        };

        Ok(Self {
            query: params.query.unwrap_or_default(),
            domain: params
                .search_type
                .as_deref()
                .map(SearchDomain::parse)
                .unwrap_or_default(),
            page,
            page_size,
            sort_by: params
                .sort_by
                .as_deref()
                .map(SortBy::parse)
                .unwrap_or_default(),
            filters,
        })
    }
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    /// Documents surviving filtering
    pub total: usize,
    pub total_pages: usize,
}

/// Echo of the normalized filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEcho {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl From<&SearchFilters> for FilterEcho {
    fn from(filters: &SearchFilters) -> Self {
        let format = |d: &DateTime<Utc>| d.to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            date_from: filters.date_from.as_ref().map(format),
            date_to: filters.date_to.as_ref().map(format),
            author: filters.author.clone(),
            category: filters.category.clone(),
        }
    }
}

/// Echo of the normalized request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    pub search_term: String,
    pub search_type: SearchDomain,
    pub sort_by: SortBy,
    pub filters: FilterEcho,
}

/// Response of a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredDocument>,
    pub pagination: Pagination,
    pub query: QueryEcho,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Parse a content or filter date.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` (taken
/// as UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_date_param(name: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| {
            NewsdeskError::Validation(format!("{name} is not a valid date: {raw}"))
        }),
    }
}

/// Coerce a numeric parameter to a positive integer.
///
/// Fractional values are truncated; missing, malformed and
/// non-positive values yield `default`.
fn coerce_positive(value: Option<&str>, default: usize) -> usize {
    let Some(raw) = value.map(str::trim) else {
        return default;
    };

    let parsed = raw
        .parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));

    match parsed {
        Some(n) if n >= 1 => n as usize,
        _ => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Reddit comment tree parser
//!
//! Reddit's JSON endpoint returns a two-element array: the post listing
//! followed by the comment listing. Each listing has the shape
//! `{data: {children: [{kind, data}, ...]}}`, and each comment's `replies`
//! field is either another listing or an empty string.
//!
//! Decoding has no nesting limit and the tree is flattened in pre-order with
//! an explicit work stack, so thread depth never grows the call stack.

use crate::config::Config;
use crate::record::{truncate_with_ellipsis, CommentRecord, DELETED_AUTHOR, DELETED_TEXT};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Kind tag of an actual comment node
pub const COMMENT_KIND: &str = "t1";

/// Kind tag of a "load more comments" stub
pub const MORE_KIND: &str = "more";

/// The scalar fields of a `t1` node, before defaults are applied
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawComment {
    author: Option<String>,
    body: Option<String>,
    score: Option<i64>,
    created_utc: Option<f64>,
    id: Option<String>,
    permalink: Option<String>,
}

impl RawComment {
    /// Applies every missing-field default
    fn into_record(self, depth: usize, config: &Config) -> CommentRecord {
        let body = self.body.unwrap_or_else(|| DELETED_TEXT.to_string());
        let text = truncate_with_ellipsis(
            &body,
            config.output.max_text_length,
            &config.output.ellipsis,
        );

        let created_at = self
            .created_utc
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts.trunc() as i64, 0))
            .unwrap_or_default();

        let permalink = self.permalink.filter(|p| !p.is_empty()).map(|p| {
            format!("{}{}", config.reddit.permalink_base.trim_end_matches('/'), p)
        });

        CommentRecord {
            author: self.author.unwrap_or_else(|| DELETED_AUTHOR.to_string()),
            text,
            score: Some(self.score.unwrap_or(0)),
            created_at: Some(created_at),
            depth,
            id: self.id.unwrap_or_default(),
            permalink,
            source: None,
        }
    }
}

/// Parses a Reddit JSON payload into comment records
///
/// # Behavior
///
/// - Payloads that are not an array of at least two elements yield no comments
/// - Only `t1` nodes are emitted; `more` stubs and other kinds are skipped
/// - Records come out in pre-order: each comment is followed by its replies
/// - Replies deeper than `reddit.max-depth` are dropped with their subtrees
/// - A `replies` object must be a listing; `""` and `null` mean no replies
///
/// # Returns
///
/// * `Ok(Vec<CommentRecord>)` - Records in pre-order
/// * `Err(serde_json::Error)` - Body is not JSON, or a listing/comment has the wrong shape
///
/// # Example
///
/// ```
/// use comment_sieve::config::Config;
/// use comment_sieve::extractor::parse_reddit_payload;
///
/// let body = r#"[{}, {"data": {"children": [
///     {"kind": "t1", "data": {"author": "alice", "body": "hi", "score": 5}}
/// ]}}]"#;
/// let records = parse_reddit_payload(body, &Config::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].author, "alice");
/// ```
pub fn parse_reddit_payload(
    body: &str,
    config: &Config,
) -> Result<Vec<CommentRecord>, serde_json::Error> {
    let payload = decode_payload(body)?;

    let mut listings = match payload {
        Value::Array(items) if items.len() > 1 => items,
        other => {
            tracing::debug!("Reddit payload has no comment listing");
            dismantle(other);
            return Ok(Vec::new());
        }
    };

    let children = listing_children(listings.swap_remove(1))?;
    listings.into_iter().for_each(dismantle);

    let mut stack: Vec<(Value, usize)> = children.into_iter().rev().map(|c| (c, 0)).collect();
    let mut records = Vec::new();

    let walked = walk(&mut stack, config, &mut records);
    stack.into_iter().for_each(|(node, _)| dismantle(node));
    walked?;

    Ok(records)
}

/// Decodes the body with no nesting limit, growing the stack on the heap as needed
fn decode_payload(body: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let payload = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(payload)
}

/// Drains the work stack, emitting records in pre-order
fn walk(
    stack: &mut Vec<(Value, usize)>,
    config: &Config,
    records: &mut Vec<CommentRecord>,
) -> Result<(), serde_json::Error> {
    let mut more_stubs = 0usize;

    while let Some((node, depth)) = stack.pop() {
        let (kind, data) = split_thing(node)?;

        if kind != COMMENT_KIND {
            if kind == MORE_KIND {
                more_stubs += 1;
            } else {
                tracing::trace!("Skipping '{}' node at depth {}", kind, depth);
            }
            dismantle(data);
            continue;
        }

        if config.reddit.max_depth.is_some_and(|max| depth > max) {
            dismantle(data);
            continue;
        }

        let mut fields = match data {
            Value::Object(fields) => fields,
            Value::Null => Map::new(),
            _ => return Err(serde_json::Error::custom("comment `data` must be an object")),
        };

        let replies = match fields.remove("replies") {
            Some(listing @ Value::Object(_)) => listing_children(listing)?,
            Some(Value::Null | Value::String(_)) | None => Vec::new(),
            Some(other) => {
                dismantle(other);
                return Err(serde_json::Error::custom(
                    "`replies` must be a listing or an empty string",
                ));
            }
        };

        // Reversed so the first reply is popped next
        stack.extend(replies.into_iter().rev().map(|child| (child, depth + 1)));

        let raw: RawComment = serde_json::from_value(Value::Object(fields))?;
        records.push(raw.into_record(depth, config));
    }

    if more_stubs > 0 {
        tracing::debug!("Skipped {} '{}' stubs", more_stubs, MORE_KIND);
    }

    Ok(())
}

/// Takes the children out of a `{data: {children: [...]}}` listing
fn listing_children(listing: Value) -> Result<Vec<Value>, serde_json::Error> {
    let Value::Object(mut listing) = listing else {
        return Err(serde_json::Error::custom("listing must be an object"));
    };

    let mut data = match listing.remove("data") {
        Some(Value::Object(data)) => data,
        Some(_) => return Err(serde_json::Error::custom("listing `data` must be an object")),
        None => return Err(serde_json::Error::missing_field("data")),
    };

    match data.remove("children") {
        Some(Value::Array(children)) => Ok(children),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(_) => Err(serde_json::Error::custom(
            "listing `children` must be an array",
        )),
    }
}

/// Splits a `{kind, data}` node into its kind tag and payload
fn split_thing(node: Value) -> Result<(String, Value), serde_json::Error> {
    let Value::Object(mut node) = node else {
        return Err(serde_json::Error::custom("listing child must be an object"));
    };

    let kind = match node.remove("kind") {
        Some(Value::String(kind)) => kind,
        Some(_) => return Err(serde_json::Error::custom("`kind` must be a string")),
        None => return Err(serde_json::Error::missing_field("kind")),
    };

    Ok((kind, node.remove("data").unwrap_or(Value::Null)))
}

/// Drops a value tree iteratively instead of through nested destructors
fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

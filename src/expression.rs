//! Placeholder-name synthesis for filter and condition expressions.
//!
//! DynamoDB expressions reference attribute values through `:name` tokens and
//! attribute names through `#name` tokens. Callers of the table client only
//! supply the value map; the matching `#name -> name` entries are derived here
//! by stripping the leading sigil from each value key. Pure string mechanics,
//! no expression-syntax validation: a malformed expression is rejected by the
//! remote service, not locally.

use std::collections::HashMap;

use aws_sdk_dynamodb::model::AttributeValue;

/// Builds an `ExpressionAttributeNames` map from the keys of an
/// `ExpressionAttributeValues` map, merged with any caller-supplied entries.
/// Caller entries win on collision.
pub fn names_from_values(
    values: &HashMap<String, AttributeValue>,
    extra_names: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut names = HashMap::with_capacity(values.len());
    for placeholder in values.keys() {
        let name = placeholder.strip_prefix(':').unwrap_or(placeholder);
        names.insert(format!("#{}", name), name.to_owned());
    }

    if let Some(extra) = extra_names {
        names.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    names
}

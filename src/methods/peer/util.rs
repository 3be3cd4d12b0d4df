use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::{Map, Value};

use super::errors::EncodingError;
use crate::didcore::Service;

// Fixed rename table between verbose service fields and their short codes.
// Kept as a single list so that both lookup directions are built from the
// same source and checked against each other.
const KEY_ABBREVIATIONS: [(&str, &str); 7] = [
    ("type", "t"),
    ("serviceEndpoint", "s"),
    ("routingKeys", "r"),
    ("accept", "a"),
    ("profile", "p"),
    ("uri", "u"),
    ("integrity", "i"),
];

// Fixed rename table for well-known string values.
const VALUE_ABBREVIATIONS: [(&str, &str); 1] = [("DIDCommMessaging", "dm")];

lazy_static! {
    static ref ABBREV_KEY: HashMap<&'static str, &'static str> = forward_table(&KEY_ABBREVIATIONS);
    static ref EXPAND_KEY: HashMap<&'static str, &'static str> = inverse_table(&KEY_ABBREVIATIONS);
    static ref ABBREV_VALUE: HashMap<&'static str, &'static str> = forward_table(&VALUE_ABBREVIATIONS);
    static ref EXPAND_VALUE: HashMap<&'static str, &'static str> = inverse_table(&VALUE_ABBREVIATIONS);
}

fn forward_table(pairs: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();
    for (long, short) in pairs {
        assert!(table.insert(*long, *short).is_none(), "duplicate long form `{long}` in rename table");
    }
    table
}

// Inverting the table asserts that no two long forms share a short code.
fn inverse_table(pairs: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();
    for (long, short) in pairs {
        assert!(table.insert(*short, *long).is_none(), "short code `{short}` is not injective in rename table");
    }
    table
}

/// Serializes a service declaration to its abbreviated canonical JSON form.
pub(super) fn abbreviate_service(service: &Service) -> Result<String, EncodingError> {
    let mut value = serde_json::to_value(service)?;
    abbreviate_value(&mut value);

    Ok(json_canon::to_string(&value)?)
}

/// Parses an expanded or abbreviated service JSON text into a [`Service`],
/// normalizing all covered field names to their verbose form.
pub(super) fn reverse_abbreviate_service(service: &str) -> Result<Service, serde_json::Error> {
    let mut value: Value = serde_json::from_str(service)?;
    expand_value(&mut value);

    serde_json::from_value(value)
}

fn abbreviate_value(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            let mut new_obj = Map::new();

            for (key, val) in obj.iter() {
                let k = ABBREV_KEY.get(key.as_str()).copied().unwrap_or(key.as_str());

                let mut v = val.clone();
                abbreviate_value(&mut v);

                new_obj.insert(k.to_string(), v);
            }

            *obj = new_obj;
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                abbreviate_value(val);
            }
        }
        Value::String(val) => {
            if let Some(short) = ABBREV_VALUE.get(val.as_str()) {
                *val = (*short).to_string();
            }
        }
        _ => (),
    }
}

fn expand_value(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            let mut new_obj = Map::new();

            for (key, val) in obj.iter() {
                let mut v = val.clone();
                expand_value(&mut v);

                match EXPAND_KEY.get(key.as_str()) {
                    // A short code never shadows an already expanded field.
                    Some(long) if obj.contains_key(*long) => continue,
                    Some(long) => new_obj.insert((*long).to_string(), v),
                    None => new_obj.insert(key.clone(), v),
                };
            }

            *obj = new_obj;
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                expand_value(val);
            }
        }
        Value::String(val) => {
            if let Some(long) = EXPAND_VALUE.get(val.as_str()) {
                *val = (*long).to_string();
            }
        }
        _ => (),
    }
}

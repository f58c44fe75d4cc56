/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * File:      value.rs
 * Purpose:   The in-memory value tree produced by parsing a PAWSON
 *            document, plus numeric narrowing and JSON conversion.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/pawson
 *
 * License:
 * This file is part of the PAWSON data notation project.
 *
 * PAWSON is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use indexmap::IndexMap;
use serde::Serialize;

/// PAWSON value representation.
///
/// This is the tree a successful `parse` returns. It is always finite and
/// acyclic: no value holds a reference back to an ancestor.
///
/// Numbers are split into exact integers and floating-point values at parse
/// time by [`Value::number`]. Objects keep their keys in insertion order;
/// a repeated key overwrites the earlier value while keeping the first
/// insertion's position.
///
/// Serialization is untagged, so a value serializes as the plain JSON shape
/// it represents (`Null` → `null`, `Int(1)` → `1`, and so on).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Builds the numeric value for a lexed number, narrowing to an exact
    /// integer where possible.
    ///
    /// The rule is explicit rather than platform-coerced: the raw value
    /// narrows to `Int` when it is finite, has zero fractional part, and
    /// lies in `[i64::MIN as f64, i64::MAX as f64)`. The upper bound is
    /// exclusive because `i64::MAX as f64` rounds up to 2^63; inside the
    /// half-open window the `as i64` cast is exact.
    ///
    /// # Examples
    /// ```
    /// use pawson::Value;
    ///
    /// assert_eq!(Value::number(1.0), Value::Int(1));
    /// assert_eq!(Value::number(-0.0), Value::Int(0));
    /// assert_eq!(Value::number(1.5), Value::Float(1.5));
    /// ```
    pub fn number(raw: f64) -> Value {
        const MIN_EXACT: f64 = i64::MIN as f64;
        const MAX_EXACT: f64 = i64::MAX as f64;

        if raw.is_finite() && raw.fract() == 0.0 && raw >= MIN_EXACT && raw < MAX_EXACT {
            Value::Int(raw as i64)
        } else {
            Value::Float(raw)
        }
    }

    /// Returns `true` for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer if this value is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Int` or `Float`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(number) => Some(*number as f64),
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text if this value is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this value is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the entries if this value is an `Object`.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Converts the tree into a `serde_json::Value`.
    ///
    /// Arrays become JSON arrays, objects keep their insertion order, and a
    /// non-finite `Float` falls back to JSON `null` since JSON has no
    /// representation for it.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Int(number) => serde_json::Value::Number((*number).into()),
            Value::Float(number) => serde_json::Number::from_f64(*number)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(text) => serde_json::Value::String(text.clone()),
            Value::Array(values) => {
                serde_json::Value::Array(values.iter().map(Value::to_json).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawson
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
/// - The document rule
pub mod parser;

/// Value-level parsing:
/// - dispatch over the five value-start kinds
/// - scalar conversion (quote stripping, numeric narrowing, literals)
pub mod values;

/// Container parsing:
/// - object and array rules
/// - close-check / break-on-missing-comma loop shape
pub mod containers;

/// Shared parser helpers:
/// - required and optional token consumption
/// - non-advancing lookahead
/// - whitespace skipping
/// - expected-set rendering
pub mod helpers;

pub use parser::{parse, Parser};

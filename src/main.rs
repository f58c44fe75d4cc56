/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line driver: reads a PAWSON document from a file or
 *            stdin, parses it, and prints the tree as JSON.
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

use std::env;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use pawson::DiagnosticPrinter;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);

    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: pawson <file.pson | ->");
            return ExitCode::FAILURE;
        }
    };

    let (file_name, source) = match read_source(&path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("pawson: cannot read '{}': {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    match pawson::parse(&source) {
        Ok(value) => {
            match serde_json::to_string_pretty(&value.to_json()) {
                Ok(rendered) => println!("{}", rendered),
                Err(error) => {
                    eprintln!("pawson: {}", error);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            DiagnosticPrinter::new(file_name, source).print(&error);
            ExitCode::FAILURE
        }
    }
}

/// Reads the document text, `-` meaning stdin. The text is forwarded to
/// the parser verbatim.
fn read_source(path: &str) -> Result<(String, String), std::io::Error> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(("<stdin>".to_string(), source))
    } else {
        Ok((path.to_string(), fs::read_to_string(path)?))
    }
}

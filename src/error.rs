// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Errors raised while parsing a PLY stream.

use std::path::PathBuf;

/// Errors encountered while reading a PLY file.
///
/// A parse either fully succeeds or fails with one of these; no partial
/// [`Document`](crate::Document) is ever returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The stream does not start with the `ply` magic line.
    #[error("Missing magic 'ply' line at start of stream")]
    Magic,

    /// The second header line is not of the shape `format <format> <version>`.
    #[error("Malformed format line: {0:?}")]
    FormatLine(String),

    /// The format token is not one of the recognized physical encodings.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// The version token is not a recognized schema version.
    #[error("Unknown version: {0}")]
    UnknownVersion(String),

    /// A `property` line names a type outside the recognized set.
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    /// A header line starts with a keyword the format does not define.
    #[error("Unknown ply command: {0:?}")]
    UnknownCommand(String),

    /// An `element` line is missing its name or count, or the count is not a
    /// non-negative integer.
    #[error("Malformed element declaration: {0:?}")]
    ElementLine(String),

    /// A `property` line is missing one of its tokens.
    #[error("Malformed property declaration: {0:?}")]
    PropertyLine(String),

    /// A `property` line appeared before any `element` line.
    #[error("Property declared before any element: {0:?}")]
    PropertyWithoutElement(String),

    /// The stream ended before `end_header`.
    #[error("Unexpected end of stream inside header")]
    UnexpectedEndOfHeader,

    /// An I/O failure while reading header lines.
    #[error("Failed to read header: {0}")]
    ReadHeader(#[source] std::io::Error),

    /// An I/O failure (including a short read) while decoding body records.
    #[error("Failed to read record data: {0}")]
    ReadRecord(#[source] std::io::Error),

    /// An ascii record line ended before every property had a value.
    #[error("Record line ended before all properties were read")]
    ShortRecordLine,

    /// An ascii token could not be parsed as the declared integer type.
    #[error("Failed to parse integer {token:?}: {source}")]
    ParseInt {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// An ascii token could not be parsed as the declared float type.
    #[error("Failed to parse float {token:?}: {source}")]
    ParseFloat {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A list length decoded to a value that cannot index a sequence.
    #[error("Invalid list length: {0}")]
    ListLength(String),

    /// The file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

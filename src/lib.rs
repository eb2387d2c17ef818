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

//! A reader for the **[PLY](https://en.wikipedia.org/wiki/PLY_(file_format))**
//! polygon file format.
//!
//! A PLY file is self-describing: an ascii header declares a sequence of
//! *elements* (e.g. `vertex`, `face`), each with a record count and an ordered
//! list of typed *properties*, followed by a body holding exactly that many
//! records in one of three physical encodings — `ascii`,
//! `binary_big_endian` or `binary_little_endian`. The schema discovered in
//! the header drives the decoding of the body.
//!
//! The simplest entry point is [`Document::from_path`] (or
//! [`Document::from_reader`] for an already-open stream), which parses the
//! whole file and accumulates every record in memory:
//!
//! ```
//! use ply_reader::Document;
//!
//! let file = b"ply\n\
//!     format ascii 1.0\n\
//!     element vertex 2\n\
//!     property float x\n\
//!     property float y\n\
//!     end_header\n\
//!     0.0 0.0\n\
//!     1.0 0.5\n";
//!
//! let document = Document::from_reader(&file[..]).unwrap();
//! let vertices = document.records("vertex").unwrap();
//! assert_eq!(vertices.len(), 2);
//! assert_eq!(vertices[1].get("y").unwrap().as_f64(), Some(0.5));
//! ```
//!
//! For large files, [`Reader`] decodes the body through a caller-supplied
//! [`RecordSink`] so records can be consumed one at a time instead of being
//! accumulated:
//!
//! ```
//! use ply_reader::{Element, PlyResult, Reader, RecordSink, types::Record};
//!
//! struct Counter(usize);
//!
//! impl RecordSink for Counter {
//!     fn accept(&mut self, _element: &Element, _record: Record) -> PlyResult<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let file = b"ply\nformat ascii 1.0\nelement vertex 1\nproperty int x\nend_header\n7\n";
//! let reader = Reader::new(&file[..]).unwrap();
//! let mut counter = Counter(0);
//! reader.read_into(&mut counter).unwrap();
//! assert_eq!(counter.0, 1);
//! ```
//!
//! This crate only reads PLY files; it does not write them.

mod decode;
mod reader;

pub mod error;
pub mod schema;
pub mod types;

pub use error::Error;
pub use reader::{Document, Reader, RecordSink};
pub use schema::{Element, Format, Header, Property, ScalarType, Version};
pub use types::{Record, Value};

/// A convenience type alias for `Result`s with `Error`s.
pub type PlyResult<T> = Result<T, Error>;

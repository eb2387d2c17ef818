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

//! The user-facing interface for reading PLY streams.

use crate::{
    PlyResult, decode,
    error::Error,
    schema::{self, Element, Format, Header, Version},
    types::Record,
};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// The consumer of decoded records during body decoding.
///
/// [`Reader::read_into`] calls [`accept`](Self::accept) once per record, in
/// element order and then record order, immediately after each record is
/// decoded. The decoder does not retain records after handing them over, so
/// a sink that discards or aggregates them lets arbitrarily large files be
/// read without buffering the full dataset in memory.
///
/// Returning an error from `accept` aborts the parse.
pub trait RecordSink {
    /// Accept one decoded record for `element`.
    fn accept(&mut self, element: &Element, record: Record) -> PlyResult<()>;
}

/// Main interface for reading PLY formatted data.
///
/// **NOTE** The PLY header is read automatically upon creation of the
/// [`Reader`], so the format, version, and element definitions are available
/// before any body byte is consumed. The body is decoded by
/// [`read_document`](Self::read_document) or [`read_into`](Self::read_into).
pub struct Reader<R> {
    header: Header,
    reader: BufReader<R>,
}

impl<R: Read> Reader<R> {
    /// Create a [`Reader`], parsing the header of the stream.
    pub fn new(reader: R) -> PlyResult<Self> {
        let mut reader = BufReader::new(reader);
        let header = schema::parse_header(&mut reader)?;
        Ok(Self { header, reader })
    }

    /// Get a reference to the parsed header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The physical encoding of the body.
    pub fn format(&self) -> Format {
        self.header.format
    }

    /// The declared schema version.
    pub fn version(&self) -> Version {
        self.header.version
    }

    /// The element definitions, in the order they were declared.
    pub fn elements(&self) -> &[Element] {
        &self.header.elements
    }

    /// Decode the whole body, handing each record to `sink`.
    ///
    /// Consumes the reader and returns the header, since the schema stays
    /// useful to callers interpreting what the sink collected.
    pub fn read_into<S: RecordSink>(mut self, sink: &mut S) -> PlyResult<Header> {
        decode::read_body(&mut self.reader, &self.header, sink)?;
        Ok(self.header)
    }

    /// Decode the whole body into a [`Document`], accumulating every record
    /// in memory.
    pub fn read_document(self) -> PlyResult<Document> {
        let mut sink = Accumulator::default();
        let header = self.read_into(&mut sink)?;
        Ok(Document {
            format: header.format,
            version: header.version,
            elements: header.elements,
            data: sink.data,
        })
    }
}

/// The default sink: appends each record to the sequence for its element
/// name, creating the sequence on first use.
#[derive(Default)]
struct Accumulator {
    data: HashMap<String, Vec<Record>>,
}

impl RecordSink for Accumulator {
    fn accept(&mut self, element: &Element, record: Record) -> PlyResult<()> {
        self.data
            .entry(element.name.clone())
            .or_default()
            .push(record);
        Ok(())
    }
}

/// A fully parsed PLY file.
///
/// Holds the schema from the header together with every decoded record,
/// grouped by element name. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    format: Format,
    version: Version,
    elements: Vec<Element>,
    data: HashMap<String, Vec<Record>>,
}

impl Document {
    /// Parse the PLY file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> PlyResult<Self> {
        let file = File::open(path.as_ref()).map_err(|source| Error::OpenFile {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse a PLY file from an already-open stream.
    pub fn from_reader<R: Read>(reader: R) -> PlyResult<Self> {
        Reader::new(reader)?.read_document()
    }

    /// The physical encoding the body used.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The declared schema version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The element definitions, in the order they were declared.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All decoded records, keyed by element name.
    ///
    /// An element whose declared count is zero has no entry.
    pub fn data(&self) -> &HashMap<String, Vec<Record>> {
        &self.data
    }

    /// The decoded records of one element, in the order they were read.
    pub fn records(&self, element: &str) -> Option<&[Record]> {
        self.data.get(element).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;
    use pretty_assertions::assert_eq;

    const TRIANGLE: &[u8] = b"ply\n\
        format ascii 1.0\n\
        element vertex 3\n\
        property float x\n\
        property float y\n\
        element edge 0\n\
        property int a\n\
        property int b\n\
        end_header\n\
        0.0 0.0\n\
        1.0 0.0\n\
        0.0 1.0\n";

    #[test]
    fn header_is_available_before_the_body_is_read() {
        let reader = Reader::new(TRIANGLE).unwrap();
        assert_eq!(reader.format(), Format::Ascii);
        assert_eq!(reader.version(), Version::V1_0);
        assert_eq!(reader.elements().len(), 2);
        assert_eq!(reader.header().elements[0].count, 3);
    }

    #[test]
    fn document_accumulates_declared_counts() {
        let document = Document::from_reader(TRIANGLE).unwrap();
        let vertices = document.records("vertex").unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[2].get("y"), Some(&Value::Float(1.0)));
        // Zero-count elements never reach the sink, so no entry is created.
        assert_eq!(document.records("edge"), None);
        assert_eq!(document.data().len(), 1);
    }

    #[test]
    fn custom_sink_replaces_accumulation() {
        #[derive(Default)]
        struct Counter(HashMap<String, usize>);

        impl RecordSink for Counter {
            fn accept(&mut self, element: &Element, _record: Record) -> PlyResult<()> {
                *self.0.entry(element.name.clone()).or_default() += 1;
                Ok(())
            }
        }

        let mut counter = Counter::default();
        Reader::new(TRIANGLE).unwrap().read_into(&mut counter).unwrap();
        assert_eq!(counter.0.get("vertex"), Some(&3));
        assert_eq!(counter.0.get("edge"), None);
    }

    #[test]
    fn sink_errors_abort_the_parse() {
        struct Failing;

        impl RecordSink for Failing {
            fn accept(&mut self, _element: &Element, _record: Record) -> PlyResult<()> {
                Err(Error::ShortRecordLine)
            }
        }

        let result = Reader::new(TRIANGLE).unwrap().read_into(&mut Failing);
        assert!(matches!(result, Err(Error::ShortRecordLine)));
    }

    #[test]
    fn missing_records_fail_the_whole_parse() {
        let truncated = &TRIANGLE[..TRIANGLE.len() - "0.0 1.0\n".len()];
        assert!(matches!(
            Document::from_reader(truncated),
            Err(Error::ReadRecord(_))
        ));
    }

    #[test]
    fn from_path_reports_the_missing_file() {
        assert!(matches!(
            Document::from_path("definitely/not/here.ply"),
            Err(Error::OpenFile { .. })
        ));
    }
}

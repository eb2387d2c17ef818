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

//! Schema-driven decoding of the body of a PLY stream.

mod ascii;
mod binary;

use crate::{
    PlyResult,
    error::Error,
    reader::RecordSink,
    schema::{Format, Header},
    types::Value,
};
use log::debug;
use std::io::BufRead;

/// Decode the body of a PLY stream.
///
/// For each element in schema order, reads exactly `count` records and hands
/// each one to the sink. The stream must be positioned at the first body
/// byte, i.e. immediately after `end_header`.
pub(crate) fn read_body<R: BufRead, S: RecordSink>(
    reader: &mut R,
    header: &Header,
    sink: &mut S,
) -> PlyResult<()> {
    for element in &header.elements {
        debug!("decoding {} '{}' records", element.count, element.name);
        for _ in 0..element.count {
            let record = match header.format {
                Format::Ascii => ascii::read_record(reader, element)?,
                Format::BinaryBigEndian => {
                    binary::read_record(reader, element, binary::ByteOrder::Big)?
                }
                Format::BinaryLittleEndian => {
                    binary::read_record(reader, element, binary::ByteOrder::Little)?
                }
            };
            sink.accept(element, record)?;
        }
    }
    Ok(())
}

/// Convert a decoded index value into a list length.
fn list_length(value: Value) -> PlyResult<usize> {
    value
        .as_u64()
        .and_then(|length| usize::try_from(length).ok())
        .ok_or_else(|| Error::ListLength(format!("{value:?}")))
}

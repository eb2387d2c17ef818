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

use crate::{
    PlyResult,
    error::Error,
    schema::{Element, Format, Header, Property, ScalarType, Version},
};
use log::debug;
use std::{io::BufRead, str::FromStr};

/// Parse the header of a PLY stream.
///
/// Consumes lines up to and including `end_header`, leaving the stream
/// positioned at the first body byte. Line dispatch works on the first
/// whitespace-separated token, as the format defines it:
///
/// - `comment` and `obj_info` lines are ignored,
/// - `element <name> <count>` begins a new element definition,
/// - `property ...` lines attach to the element currently being defined,
/// - `end_header` completes the schema.
///
/// The element being accumulated is local to this routine and is flushed
/// into the schema on every `element`/`end_header` boundary.
pub(crate) fn parse_header<R: BufRead>(reader: &mut R) -> PlyResult<Header> {
    match read_line(reader)? {
        Some(line) if line == "ply" => {}
        _ => return Err(Error::Magic),
    }

    let line = read_line(reader)?.ok_or(Error::UnexpectedEndOfHeader)?;
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let (format, version) = match tokens.as_slice() {
        ["format", fmt, ver] => (
            Format::from_str(fmt).map_err(|_| Error::UnknownFormat((*fmt).to_string()))?,
            Version::from_str(ver).map_err(|_| Error::UnknownVersion((*ver).to_string()))?,
        ),
        _ => return Err(Error::FormatLine(line.clone())),
    };
    debug!("parsing {format} ply, version {version}");

    let mut elements: Vec<Element> = Vec::new();
    // The element whose property lines we are currently collecting.
    let mut current: Option<Element> = None;
    loop {
        let line = read_line(reader)?.ok_or(Error::UnexpectedEndOfHeader)?;
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            ["comment", ..] | ["obj_info", ..] => {}
            ["end_header", ..] => {
                elements.extend(current.take());
                break;
            }
            ["element", name, count] => {
                elements.extend(current.take());
                let count = count
                    .parse::<usize>()
                    .map_err(|_| Error::ElementLine(line.clone()))?;
                debug!("element '{name}' declares {count} records");
                current = Some(Element {
                    name: (*name).to_string(),
                    count,
                    properties: Vec::new(),
                });
            }
            ["element", ..] => return Err(Error::ElementLine(line.clone())),
            ["property", rest @ ..] => {
                let property = parse_property(rest, &line)?;
                match current.as_mut() {
                    Some(element) => element.properties.push(property),
                    None => return Err(Error::PropertyWithoutElement(line.clone())),
                }
            }
            _ => return Err(Error::UnknownCommand(line.clone())),
        }
    }

    Ok(Header {
        format,
        version,
        elements,
    })
}

fn parse_property(tokens: &[&str], line: &str) -> PlyResult<Property> {
    match tokens {
        ["list", index, element, name] => Ok(Property::List {
            name: (*name).to_string(),
            index_type: scalar_type(index)?,
            element_type: scalar_type(element)?,
        }),
        [ty, name] => Ok(Property::Scalar {
            name: (*name).to_string(),
            ty: scalar_type(ty)?,
        }),
        _ => Err(Error::PropertyLine(line.to_string())),
    }
}

fn scalar_type(tag: &str) -> PlyResult<ScalarType> {
    ScalarType::from_str(tag).map_err(|_| Error::UnknownPropertyType(tag.to_string()))
}

/// Read one header line with the trailing line ending stripped.
///
/// Returns `None` at end of stream.
fn read_line<R: BufRead>(reader: &mut R) -> PlyResult<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).map_err(Error::ReadHeader)?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

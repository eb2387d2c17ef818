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
    schema::{Element, Property, ScalarType},
    types::{Record, Value},
};
use log::warn;
use std::{io::BufRead, str::SplitWhitespace};

/// Read one ascii record: exactly one line, whitespace-separated tokens
/// consumed left-to-right, one per scalar and `1 + length` per list.
pub(super) fn read_record<R: BufRead>(reader: &mut R, element: &Element) -> PlyResult<Record> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).map_err(Error::ReadRecord)?;
    if n == 0 {
        return Err(Error::ReadRecord(
            std::io::ErrorKind::UnexpectedEof.into(),
        ));
    }

    let mut tokens = line.split_whitespace();
    let mut record = Record::with_capacity(element.properties.len());
    for property in &element.properties {
        let value = match property {
            Property::Scalar { ty, .. } => scalar(&mut tokens, *ty)?,
            Property::List {
                index_type,
                element_type,
                ..
            } => {
                let length = super::list_length(scalar(&mut tokens, *index_type)?)?;
                let mut items = Vec::with_capacity(length);
                for _ in 0..length {
                    items.push(scalar(&mut tokens, *element_type)?);
                }
                Value::List(items)
            }
        };
        record.push(property.name(), value);
    }
    if tokens.next().is_some() {
        warn!("ignoring extra tokens on a '{}' record line", element.name);
    }
    Ok(record)
}

fn scalar(tokens: &mut SplitWhitespace<'_>, ty: ScalarType) -> PlyResult<Value> {
    let token = tokens.next().ok_or(Error::ShortRecordLine)?;
    match ty {
        ScalarType::Char | ScalarType::Short | ScalarType::Int => {
            token.parse().map(Value::Int).map_err(|source| Error::ParseInt {
                token: token.to_string(),
                source,
            })
        }
        ScalarType::UChar | ScalarType::UShort | ScalarType::UInt => {
            token.parse().map(Value::UInt).map_err(|source| Error::ParseInt {
                token: token.to_string(),
                source,
            })
        }
        ScalarType::Float => token.parse().map(Value::Float).map_err(|source| {
            Error::ParseFloat {
                token: token.to_string(),
                source,
            }
        }),
        ScalarType::Double => token.parse().map(Value::Double).map_err(|source| {
            Error::ParseFloat {
                token: token.to_string(),
                source,
            }
        }),
    }
}

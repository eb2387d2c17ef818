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
use std::io::Read;

/// The byte order of multi-byte fields in a binary body.
#[derive(Clone, Copy)]
pub(super) enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    fn i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::Big => i16::from_be_bytes(bytes),
            ByteOrder::Little => i16::from_le_bytes(bytes),
        }
    }

    fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        }
    }

    fn i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Big => i32::from_be_bytes(bytes),
            ByteOrder::Little => i32::from_le_bytes(bytes),
        }
    }

    fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }

    fn f32(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::Big => f32::from_be_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
        }
    }

    fn f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            ByteOrder::Big => f64::from_be_bytes(bytes),
            ByteOrder::Little => f64::from_le_bytes(bytes),
        }
    }
}

/// Read one binary record straight off the stream cursor.
///
/// The stream carries no record boundaries; a short read fails immediately
/// rather than letting subsequent fields desynchronize.
pub(super) fn read_record<R: Read>(
    reader: &mut R,
    element: &Element,
    order: ByteOrder,
) -> PlyResult<Record> {
    let mut record = Record::with_capacity(element.properties.len());
    for property in &element.properties {
        let value = match property {
            Property::Scalar { ty, .. } => scalar(reader, *ty, order)?,
            Property::List {
                index_type,
                element_type,
                ..
            } => {
                let length = super::list_length(scalar(reader, *index_type, order)?)?;
                let mut items = Vec::with_capacity(length);
                for _ in 0..length {
                    items.push(scalar(reader, *element_type, order)?);
                }
                Value::List(items)
            }
        };
        record.push(property.name(), value);
    }
    Ok(record)
}

fn scalar<R: Read>(reader: &mut R, ty: ScalarType, order: ByteOrder) -> PlyResult<Value> {
    Ok(match ty {
        ScalarType::Char => Value::Int(i64::from(read_bytes::<1, _>(reader)?[0] as i8)),
        ScalarType::UChar => Value::UInt(u64::from(read_bytes::<1, _>(reader)?[0])),
        ScalarType::Short => Value::Int(i64::from(order.i16(read_bytes(reader)?))),
        ScalarType::UShort => Value::UInt(u64::from(order.u16(read_bytes(reader)?))),
        ScalarType::Int => Value::Int(i64::from(order.i32(read_bytes(reader)?))),
        ScalarType::UInt => Value::UInt(u64::from(order.u32(read_bytes(reader)?))),
        ScalarType::Float => Value::Float(order.f32(read_bytes(reader)?)),
        ScalarType::Double => Value::Double(order.f64(read_bytes(reader)?)),
    })
}

fn read_bytes<const N: usize, R: Read>(reader: &mut R) -> PlyResult<[u8; N]> {
    let mut bytes = [0u8; N];
    reader.read_exact(&mut bytes).map_err(Error::ReadRecord)?;
    Ok(bytes)
}

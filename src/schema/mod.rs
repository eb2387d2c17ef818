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

//! The schema a PLY header declares: elements, properties, and the closed
//! sets of formats, versions, and scalar types the format defines.

mod parser;

pub(crate) use parser::parse_header;

use strum_macros::{Display, EnumString, IntoStaticStr};

/// The physical encoding of the body.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    /// One line of whitespace-separated tokens per record.
    Ascii,
    /// Fixed-width fields, most significant byte first.
    BinaryBigEndian,
    /// Fixed-width fields, least significant byte first.
    BinaryLittleEndian,
}

/// The schema version declared on the format line.
///
/// `1.0` is the only version the PLY format has ever defined.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, IntoStaticStr, PartialEq)]
pub enum Version {
    #[strum(serialize = "1.0")]
    V1_0,
}

/// A scalar property type.
///
/// Each tag has a canonical name and an explicit-width alias (`char`/`int8`,
/// `float`/`float32`, ...); both spellings are accepted when parsing a
/// header, and the canonical one is used for display. Widths follow the ILP32
/// meaning of the generic names.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, IntoStaticStr, PartialEq)]
pub enum ScalarType {
    #[strum(to_string = "char", serialize = "int8")]
    Char,
    #[strum(to_string = "uchar", serialize = "uint8")]
    UChar,
    #[strum(to_string = "short", serialize = "int16")]
    Short,
    #[strum(to_string = "ushort", serialize = "uint16")]
    UShort,
    #[strum(to_string = "int", serialize = "int32")]
    Int,
    #[strum(to_string = "uint", serialize = "uint32")]
    UInt,
    #[strum(to_string = "float", serialize = "float32")]
    Float,
    #[strum(to_string = "double", serialize = "float64")]
    Double,
}

impl ScalarType {
    /// The number of bytes one value of this type occupies in a binary body.
    pub fn width(self) -> usize {
        match self {
            ScalarType::Char | ScalarType::UChar => 1,
            ScalarType::Short | ScalarType::UShort => 2,
            ScalarType::Int | ScalarType::UInt | ScalarType::Float => 4,
            ScalarType::Double => 8,
        }
    }
}

/// A single property of an element.
///
/// Property order within an element is significant: it fixes the field order
/// of every record in both the ascii and the binary bodies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Property {
    /// A scalar-valued field.
    Scalar { name: String, ty: ScalarType },
    /// A variable-length field: each record carries a length encoded as
    /// `index_type`, followed by that many `element_type` values.
    List {
        name: String,
        index_type: ScalarType,
        element_type: ScalarType,
    },
}

impl Property {
    pub fn name(&self) -> &str {
        match self {
            Property::Scalar { name, .. } | Property::List { name, .. } => name,
        }
    }
}

/// A named, counted class of record declared in the header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    pub name: String,
    pub count: usize,
    pub properties: Vec<Property>,
}

impl Element {
    /// Look up a property of this element by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }
}

/// Everything the header declares: the physical format, the schema version,
/// and the ordered element definitions that drive body decoding.
///
/// The header is fixed once `end_header` is reached and never mutated while
/// the body is decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub format: Format,
    pub version: Version,
    pub elements: Vec<Element>,
}

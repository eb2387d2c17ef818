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

//! A triangulated unit cube, encoded in all three physical formats from the
//! same vertex and face tables. Parsing any encoding must yield the same
//! document data.

use ply_reader::{Document, Element, Error, Format, PlyResult, Reader, RecordSink, types::Record};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

type TestResult = anyhow::Result<()>;

const CUBE_VERTICES: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
];

const CUBE_FACES: [[u32; 3]; 12] = [
    [0, 1, 3],
    [1, 3, 2],
    [0, 1, 5],
    [0, 5, 4],
    [4, 0, 2],
    [4, 2, 6],
    [2, 3, 7],
    [2, 7, 6],
    [4, 5, 7],
    [4, 7, 6],
    [1, 5, 7],
    [1, 7, 3],
];

fn cube_file(format: Format) -> Vec<u8> {
    let mut file = format!(
        "ply\n\
         format {format} 1.0\n\
         comment simple triangulated cube example\n\
         element vertex 8\n\
         property float32 x\n\
         property float32 y\n\
         property float32 z\n\
         element face 12\n\
         property list uint8 uint32 vertex_indices\n\
         end_header\n"
    )
    .into_bytes();

    match format {
        Format::Ascii => {
            for vertex in CUBE_VERTICES {
                file.extend(format!("{:.1} {:.1} {:.1}\n", vertex[0], vertex[1], vertex[2]).bytes());
            }
            for face in CUBE_FACES {
                file.extend(format!("3 {} {} {}\n", face[0], face[1], face[2]).bytes());
            }
        }
        Format::BinaryBigEndian => {
            for vertex in CUBE_VERTICES {
                for coordinate in vertex {
                    file.extend(coordinate.to_be_bytes());
                }
            }
            for face in CUBE_FACES {
                file.push(3);
                for index in face {
                    file.extend(index.to_be_bytes());
                }
            }
        }
        Format::BinaryLittleEndian => {
            for vertex in CUBE_VERTICES {
                for coordinate in vertex {
                    file.extend(coordinate.to_le_bytes());
                }
            }
            for face in CUBE_FACES {
                file.push(3);
                for index in face {
                    file.extend(index.to_le_bytes());
                }
            }
        }
    }
    file
}

#[rstest]
#[case::ascii(Format::Ascii)]
#[case::binary_big_endian(Format::BinaryBigEndian)]
#[case::binary_little_endian(Format::BinaryLittleEndian)]
fn parses_the_cube(#[case] format: Format) -> TestResult {
    let document = Document::from_reader(cube_file(format).as_slice())?;

    assert_eq!(document.format(), format);
    assert_eq!(document.version().to_string(), "1.0");

    let vertices = document.records("vertex").unwrap();
    let faces = document.records("face").unwrap();
    assert_eq!(vertices.len(), 8);
    assert_eq!(faces.len(), 12);
    assert_eq!(vertices[7].get("x").unwrap().as_f64(), Some(1.0));
    assert_eq!(
        faces[11].get("vertex_indices").unwrap().as_list().unwrap()[2].as_u64(),
        Some(3)
    );
    Ok(())
}

#[rstest]
#[case::binary_big_endian(Format::BinaryBigEndian)]
#[case::binary_little_endian(Format::BinaryLittleEndian)]
fn encodings_decode_to_equal_data(#[case] format: Format) -> TestResult {
    let ascii = Document::from_reader(cube_file(Format::Ascii).as_slice())?;
    let binary = Document::from_reader(cube_file(format).as_slice())?;

    assert_eq!(ascii.elements(), binary.elements());
    assert_eq!(ascii.data(), binary.data());
    Ok(())
}

#[rstest]
#[case::ascii(Format::Ascii)]
#[case::binary_big_endian(Format::BinaryBigEndian)]
#[case::binary_little_endian(Format::BinaryLittleEndian)]
fn every_element_yields_its_declared_count(#[case] format: Format) -> TestResult {
    let document = Document::from_reader(cube_file(format).as_slice())?;
    for element in document.elements() {
        assert_eq!(document.records(&element.name).unwrap().len(), element.count);
    }
    Ok(())
}

#[rstest]
#[case::ascii(Format::Ascii)]
#[case::binary_big_endian(Format::BinaryBigEndian)]
#[case::binary_little_endian(Format::BinaryLittleEndian)]
fn every_list_matches_its_length_prefix(#[case] format: Format) -> TestResult {
    let document = Document::from_reader(cube_file(format).as_slice())?;
    for face in document.records("face").unwrap() {
        assert_eq!(face.get("vertex_indices").unwrap().as_list().unwrap().len(), 3);
    }
    Ok(())
}

#[rstest]
#[case::ascii(Format::Ascii)]
#[case::binary_big_endian(Format::BinaryBigEndian)]
#[case::binary_little_endian(Format::BinaryLittleEndian)]
fn counting_sink_sees_every_record(#[case] format: Format) -> TestResult {
    #[derive(Default)]
    struct Counter(HashMap<String, usize>);

    impl RecordSink for Counter {
        fn accept(&mut self, element: &Element, _record: Record) -> PlyResult<()> {
            *self.0.entry(element.name.clone()).or_default() += 1;
            Ok(())
        }
    }

    let file = cube_file(format);
    let mut counter = Counter::default();
    Reader::new(file.as_slice())?.read_into(&mut counter)?;

    assert_eq!(counter.0.get("vertex"), Some(&8));
    assert_eq!(counter.0.get("face"), Some(&12));
    Ok(())
}

#[test]
fn rejects_a_stream_without_the_magic_line() {
    let mut file = cube_file(Format::Ascii);
    // Corrupt the magic line; the header phase must fail without touching
    // the body.
    file[0] = b'x';
    assert!(matches!(
        Document::from_reader(file.as_slice()),
        Err(Error::Magic)
    ));
}

#[test]
fn rejects_an_unknown_property_type() {
    let file = b"ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property quaternion x\n\
        end_header\n\
        0.0\n";
    assert!(matches!(
        Document::from_reader(&file[..]),
        Err(Error::UnknownPropertyType(tag)) if tag == "quaternion"
    ));
}

#[test]
fn rejects_a_truncated_binary_body() {
    let mut file = cube_file(Format::BinaryLittleEndian);
    file.truncate(file.len() - 5);
    assert!(matches!(
        Document::from_reader(file.as_slice()),
        Err(Error::ReadRecord(_))
    ));
}

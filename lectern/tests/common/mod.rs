#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build an in-memory `.pptx` whose slide parts are written in the given
/// order. Each tuple is `(slide number, text runs)`.
pub fn build_pptx(slides: &[(u32, Vec<&str>)]) -> Vec<u8> {
    let mut parts: Vec<(String, String)> = vec![
        ("[Content_Types].xml".to_string(), pptx_content_types(slides)),
        ("_rels/.rels".to_string(), RELS_PPTX.to_string()),
        ("ppt/presentation.xml".to_string(), presentation_xml(slides)),
    ];
    for (number, runs) in slides {
        parts.push((format!("ppt/slides/slide{number}.xml"), slide_xml(runs)));
    }
    zip_parts(&parts, zip::CompressionMethod::Deflated)
}

/// A presentation package with no `ppt/slides/` entries at all.
pub fn build_pptx_without_slides() -> Vec<u8> {
    zip_parts(
        &[
            ("[Content_Types].xml".to_string(), pptx_content_types(&[])),
            ("_rels/.rels".to_string(), RELS_PPTX.to_string()),
            ("ppt/presentation.xml".to_string(), presentation_xml(&[])),
        ],
        zip::CompressionMethod::Deflated,
    )
}

/// Zip the given parts uncompressed so tests can corrupt file data in place.
pub fn zip_parts_stored(parts: &[(String, String)]) -> Vec<u8> {
    zip_parts(parts, zip::CompressionMethod::Stored)
}

pub fn zip_parts(parts: &[(String, String)], method: zip::CompressionMethod) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .unix_permissions(0o644);

        for (name, body) in parts {
            zip.start_file(name.as_str(), options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer.into_inner()
}

/// Replace `needle` with `replacement` (same length) inside raw bytes.
pub fn corrupt(bytes: &mut [u8], needle: &[u8], replacement: &[u8]) {
    assert_eq!(needle.len(), replacement.len());
    let position = bytes
        .windows(needle.len())
        .position(|window| window == needle)
        .expect("needle not found in archive bytes");
    bytes[position..position + needle.len()].copy_from_slice(replacement);
}

pub fn slide_xml(runs: &[&str]) -> String {
    let paragraphs: String = runs
        .iter()
        .map(|run| format!("<a:p><a:r><a:rPr lang=\"en-US\"/><a:t>{run}</a:t></a:r></a:p>"))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:spTree><p:sp><p:txBody><a:bodyPr/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld>
</p:sld>"#
    )
}

const RELS_PPTX: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#;

fn pptx_content_types(slides: &[(u32, Vec<&str>)]) -> String {
    let overrides: String = slides
        .iter()
        .map(|(number, _)| {
            format!(
                r#"<Override PartName="/ppt/slides/slide{number}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
{overrides}</Types>"#
    )
}

fn presentation_xml(slides: &[(u32, Vec<&str>)]) -> String {
    let slide_ids: String = slides
        .iter()
        .map(|(number, _)| format!(r#"<p:sldId id="{}" r:id="rId{number}"/>"#, 255 + number))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldIdLst>{slide_ids}</p:sldIdLst>
</p:presentation>"#
    )
}

/// A cell written into a generated worksheet.
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// Build an in-memory `.xlsx` with one worksheet per `(name, rows)` pair,
/// in the given order.
pub fn build_xlsx(sheets: &[(&str, Vec<Vec<Cell<'_>>>)]) -> Vec<u8> {
    zip_parts(&xlsx_parts(sheets), zip::CompressionMethod::Deflated)
}

/// The zip parts of a generated workbook, for tests that tamper with a part
/// before zipping.
pub fn xlsx_parts(sheets: &[(&str, Vec<Vec<Cell<'_>>>)]) -> Vec<(String, String)> {
    let mut content_overrides = String::new();
    let mut workbook_sheets = String::new();
    let mut relationships = String::new();
    let mut parts = Vec::new();

    for (i, (name, rows)) in sheets.iter().enumerate() {
        let n = i + 1;
        content_overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        workbook_sheets.push_str(&format!(
            r#"<sheet name="{name}" sheetId="{n}" r:id="rId{n}"/>"#
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
        parts.push((format!("xl/worksheets/sheet{n}.xml"), worksheet_xml(rows)));
    }

    let mut all_parts = vec![
        (
            "[Content_Types].xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    {content_overrides}
</Types>"#
            ),
        ),
        ("_rels/.rels".to_string(), RELS_XLSX.to_string()),
        (
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>{workbook_sheets}</sheets>
</workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{relationships}</Relationships>"#
            ),
        ),
    ];
    all_parts.extend(parts);
    all_parts
}

const RELS_XLSX: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

fn worksheet_xml(rows: &[Vec<Cell<'_>>]) -> String {
    let mut data = String::new();
    for (r, row) in rows.iter().enumerate() {
        let row_number = r + 1;
        data.push_str(&format!(r#"<row r="{row_number}">"#));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{row_number}", column_name(c));
            match cell {
                Cell::Text(text) => data.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{text}</t></is></c>"#
                )),
                Cell::Number(value) => {
                    data.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#))
                }
            }
        }
        data.push_str("</row>");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData>{data}</sheetData>
</worksheet>"#
    )
}

fn column_name(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Build an in-memory `.docx` from paragraphs and an optional table.
pub fn build_docx(paragraphs: &[&str], table: Option<Vec<Vec<&str>>>) -> Vec<u8> {
    use docx_rs::*;

    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }

    if let Some(rows) = table {
        let table_rows = rows
            .iter()
            .map(|cells| {
                TableRow::new(
                    cells
                        .iter()
                        .map(|text| {
                            TableCell::new()
                                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
                        })
                        .collect(),
                )
            })
            .collect();
        docx = docx.add_table(Table::new(table_rows));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

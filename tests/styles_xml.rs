use std::io::Write;
use std::path::{Path, PathBuf};

use docxstyle::docx::parse_styles_xml;
use docxstyle::{Error, TabKind, TabLeader, read_paragraph_styles};

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults/>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:pPr>
      <w:spacing w:after="160" w:line="259" w:lineRule="auto"/>
    </w:pPr>
  </w:style>
  <w:style w:type="character" w:styleId="Strong">
    <w:name w:val="Strong"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:pageBreakBefore w:val="0"/>
      <w:widowControl w:val="false"/>
      <w:spacing w:before="240" w:after="0" w:line="360" w:lineRule="exact"/>
      <w:jc w:val="center"/>
    </w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListBody">
    <w:basedOn w:val="Normal"/>
    <w:pPr>
      <w:tabs>
        <w:tab w:val="left" w:pos="720"/>
        <w:tab w:val="decimal" w:pos="4320" w:leader="dot"/>
        <w:tab w:val="sideways" w:pos="5000"/>
      </w:tabs>
      <w:ind w:left="1440" w:hanging="360"/>
      <w:spacing w:before="abc"/>
    </w:pPr>
  </w:style>
</w:styles>"#;

fn write_docx(dir: &Path, parts: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("fixture.docx");
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

const DOCUMENT_XML: &str = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;

#[test]
fn reads_only_paragraph_styles_in_order() {
    let defs = parse_styles_xml(STYLES_XML).unwrap();
    let ids: Vec<&str> = defs.iter().map(|d| d.style_id.as_str()).collect();
    assert_eq!(ids, ["Normal", "Heading1", "ListBody"]);
    assert_eq!(defs[1].name.as_deref(), Some("heading 1"));
    assert_eq!(defs[2].name, None);
}

#[test]
fn auto_line_spacing_sets_line_height() {
    let defs = parse_styles_xml(STYLES_XML).unwrap();
    let normal = &defs[0].style;
    assert_eq!(normal.space_after(), Some(160));
    assert_eq!(normal.spacing(), Some(259));
    let lh = normal.line_height().unwrap();
    assert!((lh - 259.0 / 240.0).abs() < 1e-6);
    assert_eq!(normal.based_on(), "Normal");
}

#[test]
fn heading_properties() {
    let defs = parse_styles_xml(STYLES_XML).unwrap();
    let heading = &defs[1].style;
    assert_eq!(heading.based_on(), "Normal");
    assert_eq!(heading.next(), Some("Normal"));
    assert_eq!(heading.align(), Some("center"));
    assert_eq!(heading.space_before(), Some(240));
    assert_eq!(heading.space_after(), Some(0));
    assert_eq!(heading.spacing(), Some(360));
    assert_eq!(heading.line_height(), None);
    assert!(heading.keep_next());
    assert!(heading.keep_lines());
    assert!(!heading.page_break_before());
    assert!(!heading.widow_control());
}

#[test]
fn indentation_is_read_as_twips() {
    let defs = parse_styles_xml(STYLES_XML).unwrap();
    let list = &defs[2].style;
    assert_eq!(list.indent(), Some(1440));
    assert_eq!(list.hanging(), Some(360));
    assert_eq!(list.space_before(), None);
    assert!(list.widow_control());
}

#[test]
fn tab_stops_skip_unknown_kinds() {
    let defs = parse_styles_xml(STYLES_XML).unwrap();
    let tabs = defs[2].style.tabs().unwrap();
    assert_eq!(tabs.len(), 2);
    let first = tabs.get(0).unwrap();
    assert_eq!((first.kind, first.position, first.leader), (TabKind::Left, 720, None));
    let second = tabs.get(1).unwrap();
    assert_eq!(
        (second.kind, second.position, second.leader),
        (TabKind::Decimal, 4320, Some(TabLeader::Dot))
    );
}

#[test]
fn rejects_non_styles_root() {
    let err = parse_styles_xml(DOCUMENT_XML).unwrap_err();
    assert!(matches!(err, Error::InvalidDocx(_)));
}

#[test]
fn rejects_malformed_xml() {
    let err = parse_styles_xml("<w:styles").unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
}

#[test]
fn reads_styles_from_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(
        dir.path(),
        &[("word/document.xml", DOCUMENT_XML), ("word/styles.xml", STYLES_XML)],
    );
    let defs = read_paragraph_styles(&path).unwrap();
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[1].style_id, "Heading1");
}

#[test]
fn package_without_styles_has_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), &[("word/document.xml", DOCUMENT_XML)]);
    assert!(read_paragraph_styles(&path).unwrap().is_empty());
}

#[test]
fn package_without_document_is_not_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), &[("word/styles.xml", STYLES_XML)]);
    let err = read_paragraph_styles(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidDocx(_)));
}

#[test]
fn corrupt_document_entry_is_a_zip_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(
        dir.path(),
        &[("word/document.xml", DOCUMENT_XML), ("word/styles.xml", STYLES_XML)],
    );
    // Break the local header signature of the first entry; the central
    // directory still lists it.
    let mut bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    bytes[0] = b'X';
    std::fs::write(&path, bytes).unwrap();

    let err = read_paragraph_styles(&path).unwrap_err();
    assert!(matches!(err, Error::Zip(_)), "{err}");
}

#[test]
fn not_a_zip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.docx");
    std::fs::write(&path, "just text").unwrap();
    assert!(matches!(read_paragraph_styles(&path), Err(Error::Zip(_))));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_paragraph_styles(&dir.path().join("absent.docx")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::model::ParagraphStyle;
use crate::tabs::{TabKind, TabLeader, TabStop};
use crate::units::LINE_TWIPS;

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const STYLES_PART: &str = "word/styles.xml";

/// A named paragraph style from `word/styles.xml`.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleDefinition {
    pub style_id: String,
    pub name: Option<String>,
    pub style: ParagraphStyle,
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn wml_attr<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

fn twips_attr(node: roxmltree::Node, attr: &str) -> Option<i32> {
    let raw = node.attribute((WML_NS, attr))?;
    match raw.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::debug!("skipping non-integer w:{attr}=\"{raw}\"");
            None
        }
    }
}

/// ST_OnOff: a bare element is on; `0`, `false` and `off` turn it off.
fn on_off(node: roxmltree::Node, child: &str) -> Option<bool> {
    let el = wml(node, child)?;
    Some(!matches!(
        el.attribute((WML_NS, "val")),
        Some("0" | "false" | "off")
    ))
}

fn parse_tabs(tabs: roxmltree::Node) -> Vec<TabStop> {
    let mut stops = Vec::new();
    for tab in tabs.children() {
        if tab.tag_name().name() != "tab" || tab.tag_name().namespace() != Some(WML_NS) {
            continue;
        }
        let kind = tab
            .attribute((WML_NS, "val"))
            .and_then(|v| v.parse::<TabKind>().ok());
        let (Some(kind), Some(position)) = (kind, twips_attr(tab, "pos")) else {
            log::debug!("skipping incomplete w:tab");
            continue;
        };
        let leader = tab
            .attribute((WML_NS, "leader"))
            .and_then(|v| v.parse::<TabLeader>().ok());
        stops.push(TabStop { kind, position, leader });
    }
    stops
}

fn apply_ppr(style: &mut ParagraphStyle, ppr: roxmltree::Node) {
    if let Some(jc) = wml_attr(ppr, "jc") {
        style.set_align(jc);
    }

    if let Some(spacing) = wml(ppr, "spacing") {
        if let Some(v) = twips_attr(spacing, "before") {
            style.set_space_before(v);
        }
        if let Some(v) = twips_attr(spacing, "after") {
            style.set_space_after(v);
        }
        if let Some(line) = twips_attr(spacing, "line") {
            let rule = spacing.attribute((WML_NS, "lineRule")).unwrap_or("auto");
            // auto spacing is in 240ths of a line; exact/atLeast are plain twips
            if rule == "auto"
                && line > 0
                && let Err(e) = style.set_line_height(line as f64 / LINE_TWIPS)
            {
                log::warn!("skipping w:line=\"{line}\": {e}");
            }
            style.set_spacing(line);
        }
    }

    if let Some(ind) = wml(ppr, "ind") {
        if let Some(v) = twips_attr(ind, "left").or_else(|| twips_attr(ind, "start")) {
            style.set_indent(v);
        }
        if let Some(v) = twips_attr(ind, "hanging") {
            style.set_hanging(v);
        }
    }

    if let Some(tabs) = wml(ppr, "tabs") {
        style.set_tabs(parse_tabs(tabs));
    }

    if let Some(on) = on_off(ppr, "widowControl") {
        style.set_widow_control(on);
    }
    if let Some(on) = on_off(ppr, "keepNext") {
        style.set_keep_next(on);
    }
    if let Some(on) = on_off(ppr, "keepLines") {
        style.set_keep_lines(on);
    }
    if let Some(on) = on_off(ppr, "pageBreakBefore") {
        style.set_page_break_before(on);
    }
}

/// Reads every paragraph style in a `styles.xml` document, in document order.
pub fn parse_styles_xml(xml_content: &str) -> Result<Vec<StyleDefinition>, Error> {
    let xml = roxmltree::Document::parse(xml_content)?;
    let root = xml.root_element();
    if root.tag_name().name() != "styles" || root.tag_name().namespace() != Some(WML_NS) {
        return Err(Error::InvalidDocx(format!(
            "expected w:styles root, found '{}'",
            root.tag_name().name()
        )));
    }

    let mut definitions = Vec::new();
    for style_node in root.children() {
        if style_node.tag_name().name() != "style"
            || style_node.tag_name().namespace() != Some(WML_NS)
        {
            continue;
        }
        if style_node.attribute((WML_NS, "type")) != Some("paragraph") {
            continue;
        }
        let Some(style_id) = style_node.attribute((WML_NS, "styleId")) else {
            log::debug!("skipping paragraph style without w:styleId");
            continue;
        };

        let mut style = ParagraphStyle::new();
        if let Some(based_on) = wml_attr(style_node, "basedOn") {
            style.set_based_on(based_on);
        }
        if let Some(next) = wml_attr(style_node, "next") {
            style.set_next(next);
        }
        if let Some(ppr) = wml(style_node, "pPr") {
            apply_ppr(&mut style, ppr);
        }

        definitions.push(StyleDefinition {
            style_id: style_id.to_string(),
            name: wml_attr(style_node, "name").map(str::to_string),
            style,
        });
    }

    log::debug!("read {} paragraph styles", definitions.len());
    Ok(definitions)
}

/// Reads the paragraph styles of a `.docx` package. A package without a
/// styles part has no styles.
pub fn read_paragraph_styles(path: &Path) -> Result<Vec<StyleDefinition>, Error> {
    let file = std::fs::File::open(path)?;
    let mut zip = zip::ZipArchive::new(file)?;

    match zip.by_name("word/document.xml") {
        Ok(_) => {}
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(Error::InvalidDocx("missing word/document.xml".into()));
        }
        Err(e) => return Err(e.into()),
    }

    let mut xml_content = String::new();
    match zip.by_name(STYLES_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml_content)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            log::debug!("{} has no {STYLES_PART}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    }

    parse_styles_xml(&xml_content)
}

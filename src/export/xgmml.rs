//! XGMML writer
//!
//! Emits the Cytoscape-flavoured XGMML document: a `graph` root carrying
//! the title and metadata `att` elements, then every node and edge with its
//! attributes in insertion order.

use super::{ExportError, ExportResult};
use crate::graph::{Attributes, Network};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// XGMML default namespace
pub const XGMML_NS: &str = "http://www.cs.rpi.edu/XGMML";

/// Write `network` as an XGMML document
pub fn write_to<W: Write>(network: &Network, out: W) -> ExportResult<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let graph = BytesStart::new("graph").with_attributes([
        attribute("label", &network.title),
        attribute("directed", "1"),
        attribute("xmlns", XGMML_NS),
    ]);
    writer.write_event(Event::Start(graph))?;
    write_attributes(&mut writer, &network.metadata)?;

    for node in network.nodes() {
        let start = BytesStart::new("node")
            .with_attributes([attribute("id", node.id.as_str()), attribute("label", node.label())]);
        writer.write_event(Event::Start(start))?;
        write_attributes(&mut writer, &node.attributes)?;
        writer.write_event(Event::End(BytesEnd::new("node")))?;
    }

    for edge in network.edges() {
        let start = BytesStart::new("edge").with_attributes([
            attribute("id", edge.id.as_str()),
            attribute("label", edge.id.as_str()),
            attribute("source", edge.source.as_str()),
            attribute("target", edge.target.as_str()),
        ]);
        writer.write_event(Event::Start(start))?;
        write_attributes(&mut writer, &edge.attributes)?;
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.into_inner().flush()?;
    Ok(())
}

/// Render `network` as an XGMML string
pub fn to_string(network: &Network) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_to(network, &mut buf)?;
    String::from_utf8(buf).map_err(ExportError::from)
}

/// Escape an attribute value, including the whitespace characters an XML
/// reader would otherwise normalize to spaces.
fn escape_attribute_value(value: &str) -> String {
    escape(value)
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}

fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escape_attribute_value(value).into_bytes()),
    }
}

fn write_attributes<W: Write>(writer: &mut Writer<W>, attributes: &Attributes) -> ExportResult<()> {
    for (name, value) in attributes.iter() {
        let att = BytesStart::new("att").with_attributes([
            attribute("name", name),
            attribute("value", &value.to_string()),
            attribute("type", value.type_name()),
        ]);
        writer.write_event(Event::Empty(att))?;
    }
    Ok(())
}

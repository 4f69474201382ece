//! JSON writer

use super::ExportResult;
use crate::graph::Network;
use std::io::Write;

/// Write `network` as pretty-printed JSON
pub fn write_to<W: Write>(network: &Network, mut out: W) -> ExportResult<()> {
    serde_json::to_writer_pretty(&mut out, network)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, NodeId};

    #[test]
    fn network_as_json() {
        let mut network = Network::new("DrugBank v4");
        network.append_metadata("Database", "DrugBank v4").unwrap();
        network
            .add_node("DB1")
            .unwrap()
            .append_attribute("groups", "approved")
            .unwrap();
        network.add_node("T1").unwrap();
        let (d, t) = (NodeId::from("DB1"), NodeId::from("T1"));
        network.add_edge(EdgeId::for_pair(&d, &t), &d, &t).unwrap();

        let mut buf = Vec::new();
        write_to(&network, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["title"], "DrugBank v4");
        assert_eq!(value["metadata"]["Database"], "DrugBank v4");
        assert_eq!(value["nodes"][0]["id"], "DB1");
        assert_eq!(value["nodes"][0]["attributes"]["groups"], "approved");
        assert_eq!(value["edges"][0]["source"], "DB1");
        assert_eq!(value["edges"][0]["target"], "T1");
    }
}

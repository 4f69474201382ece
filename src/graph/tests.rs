//! Container and serialization tests

use serde_json::{json, Value};

/// Fixture: a drug node and a target node joined by one interaction
fn fixture_network_json() -> Value {
    json!({
        "title": "DrugBank v4",
        "metadata": { "Database": "DrugBank v4" },
        "nodes": [
            { "id": "DB00001", "attributes": { "name": "DB00001", "biologicalType": "drug" } },
            { "id": "BE0000048", "attributes": { "name": "F2", "biologicalType": "target" } }
        ],
        "edges": [
            {
                "id": "DB00001-BE0000048",
                "source": "DB00001",
                "target": "BE0000048",
                "attributes": { "interactionType": "drug-target" }
            }
        ]
    })
}

#[cfg(test)]
mod container_tests {
    use crate::graph::{EdgeId, Network, NetworkError, NodeId};

    #[test]
    fn duplicate_node_rejected() {
        let mut net = Network::new("test");
        net.add_node("A").unwrap();

        let err = net.add_node("A").unwrap_err();
        assert_eq!(err, NetworkError::DuplicateNode(NodeId::from("A")));
        assert_eq!(net.node_count(), 1);
    }

    #[test]
    fn edge_requires_both_endpoints() {
        let mut net = Network::new("test");
        net.add_node("A").unwrap();
        let a = NodeId::from("A");
        let z = NodeId::from("Z");

        let err = net.add_edge(EdgeId::for_pair(&a, &z), &a, &z).unwrap_err();
        assert!(matches!(err, NetworkError::MissingEndpoint { ref node, .. } if node == &z));
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn duplicate_edge_rejected() {
        let mut net = Network::new("test");
        net.add_node("A").unwrap();
        net.add_node("B").unwrap();
        let (a, b) = (NodeId::from("A"), NodeId::from("B"));

        net.add_edge(EdgeId::for_pair(&a, &b), &a, &b).unwrap();
        let err = net.add_edge(EdgeId::for_pair(&a, &b), &a, &b).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateEdge(EdgeId::from("A-B")));
    }

    #[test]
    fn attribute_written_once() {
        let mut net = Network::new("test");
        let node = net.add_node("A").unwrap();
        node.append_attribute("name", "first").unwrap();

        let err = node.append_attribute("name", "second").unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateAttribute { .. }));
        assert_eq!(node.attributes.get_str("name"), Some("first"));
    }

    #[test]
    fn metadata_written_once() {
        let mut net = Network::new("test");
        net.append_metadata("Database", "DrugBank v4").unwrap();
        assert!(net.append_metadata("Database", "other").is_err());
        assert_eq!(net.metadata.len(), 1);
    }

    #[test]
    fn label_falls_back_to_id() {
        let mut net = Network::new("test");
        net.add_node("A").unwrap();
        net.add_node("B").unwrap().append_attribute("name", "Beta").unwrap();

        assert_eq!(net.node(&NodeId::from("A")).unwrap().label(), "A");
        assert_eq!(net.node(&NodeId::from("B")).unwrap().label(), "Beta");
    }

    #[test]
    fn edges_from_and_to_filter_by_endpoint() {
        let mut net = Network::new("test");
        for id in ["D1", "D2", "T1"] {
            net.add_node(id).unwrap();
        }
        let (d1, d2, t1) = (NodeId::from("D1"), NodeId::from("D2"), NodeId::from("T1"));
        net.add_edge(EdgeId::for_pair(&d1, &t1), &d1, &t1).unwrap();
        net.add_edge(EdgeId::for_pair(&d2, &t1), &d2, &t1).unwrap();

        assert_eq!(net.edges_from(&d1).count(), 1);
        assert_eq!(net.edges_to(&t1).count(), 2);
        assert_eq!(net.edges_from(&t1).count(), 0);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut net = Network::new("test");
        for id in ["C", "A", "B"] {
            net.add_node(id).unwrap();
        }
        let ids: Vec<&str> = net.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{AttributeValue, EdgeId, Network, NodeId};

    fn fixture_network() -> Network {
        let mut net = Network::new("DrugBank v4");
        net.append_metadata("Database", "DrugBank v4").unwrap();

        let drug = net.add_node("DB00001").unwrap();
        drug.append_attribute("name", "DB00001").unwrap();
        drug.append_attribute("biologicalType", "drug").unwrap();

        let target = net.add_node("BE0000048").unwrap();
        target.append_attribute("name", "F2").unwrap();
        target.append_attribute("biologicalType", "target").unwrap();

        let (d, t) = (NodeId::from("DB00001"), NodeId::from("BE0000048"));
        net.add_edge(EdgeId::for_pair(&d, &t), &d, &t)
            .unwrap()
            .append_attribute("interactionType", "drug-target")
            .unwrap();
        net
    }

    #[test]
    fn network_serializes_to_fixture() {
        let json = serde_json::to_value(fixture_network()).unwrap();
        assert_eq!(json, fixture_network_json());
    }

    #[test]
    fn attributes_serialize_in_insertion_order() {
        let json = serde_json::to_string(&fixture_network()).unwrap();
        let name = json.find("\"name\":\"DB00001\"").unwrap();
        let kind = json.find("\"biologicalType\":\"drug\"").unwrap();
        assert!(name < kind);
    }

    #[test]
    fn node_id_serializes_as_string() {
        let id = NodeId::from_string("DB00001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DB00001\"");
    }

    #[test]
    fn attribute_values_serialize_untagged() {
        assert_eq!(serde_json::to_value(AttributeValue::from("x")).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(AttributeValue::from(3_i64)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(AttributeValue::from(true)).unwrap(), json!(true));
    }

    #[test]
    fn attribute_type_names_match_xgmml() {
        assert_eq!(AttributeValue::from("x").type_name(), "string");
        assert_eq!(AttributeValue::from(1_i64).type_name(), "integer");
        assert_eq!(AttributeValue::from(0.5).type_name(), "real");
        assert_eq!(AttributeValue::from(false).type_name(), "boolean");
        assert_eq!(AttributeValue::from(true).to_string(), "1");
    }
}

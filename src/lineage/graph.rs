use crate::cli::types::AcquisitionType;
use crate::storage::PlayerLineage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Player,
    Trade,
    Pick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub sublabel: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

/// Node/edge view of a lineage, flowing from the origin trade to the player.
///
/// Chain nodes are listed newest first, directly after the player node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl LineageGraph {
    pub fn from_lineage(lineage: &PlayerLineage) -> Self {
        let mut graph = LineageGraph::default();
        let player = &lineage.player;

        let player_node = format!("player-{}", player.id);
        graph.nodes.push(GraphNode {
            id: player_node.clone(),
            kind: NodeKind::Player,
            label: player.name.clone(),
            sublabel: player.team.as_ref().map(|t| t.name.clone()),
            date: None,
            color: player.team.as_ref().and_then(|t| t.primary_color.clone()),
        });

        let acquisition = lineage.acquisition.as_ref();
        let drafted_on = acquisition
            .filter(|a| a.acquisition_type == AcquisitionType::Draft)
            .map(|a| a.date);

        // Walk newest to oldest, linking each step to the one after it.
        let mut target = player_node;
        let mut edge_label = acquisition.map(|a| a.acquisition_type.to_string());
        for (index, step) in lineage.chain.iter().enumerate().rev() {
            let is_draft = Some(step.date) == drafted_on && index + 1 == lineage.chain.len();
            let id = format!("step-{}", index);
            graph.nodes.push(GraphNode {
                id: id.clone(),
                kind: if is_draft { NodeKind::Pick } else { NodeKind::Trade },
                label: step.event.clone(),
                sublabel: Some(step.action.clone()),
                date: Some(step.date),
                color: None,
            });
            graph.push_edge(&id, &target, edge_label.take());
            target = id;
        }

        if let Some(origin) = acquisition.and_then(|a| a.origin_trade.as_ref()) {
            let origin_in_chain = lineage
                .chain
                .iter()
                .any(|s| s.date == origin.date && s.event == origin.description);

            if !origin_in_chain {
                let id = format!("trade-{}", origin.id);
                graph.nodes.push(GraphNode {
                    id: id.clone(),
                    kind: NodeKind::Trade,
                    label: origin.description.clone(),
                    sublabel: Some("Origin trade".to_string()),
                    date: Some(origin.date),
                    color: None,
                });
                graph.push_edge(&id, &target, edge_label.take());
            }
        }

        graph
    }

    fn push_edge(&mut self, source: &str, target: &str, label: Option<String>) {
        self.edges.push(GraphEdge {
            id: format!("{}->{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            label,
        });
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

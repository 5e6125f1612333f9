use std::collections::HashMap;

use serde::Serialize;

use crate::models::Attack;

/// Graph node: one per roster user, flagged when globally most attacked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "mostAttacked")]
    pub most_attacked: bool,
}

/// Directed edge attacker -> victim; parallel attacks collapse into weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: usize,
}

/// Static snapshot of a team's attack relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Build the weighted directed graph of a team's attacks.
///
/// Edges appear in the order their (attacker, victim) pair first occurs, so
/// rebuilding from unchanged data yields an identical snapshot. Edge endpoints
/// come straight from the ledger and may reference names no longer on the
/// roster.
pub fn build_graph(roster: &[String], attacks: &[Attack]) -> AttackGraph {
    let mut edges: Vec<Edge> = Vec::new();
    let mut edge_index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut victim_counts: HashMap<&str, usize> = HashMap::new();

    for attack in attacks {
        let key = (attack.attacker.as_str(), attack.victim.as_str());
        match edge_index.get(&key) {
            Some(&i) => edges[i].weight += 1,
            None => {
                edge_index.insert(key, edges.len());
                edges.push(Edge {
                    from: attack.attacker.clone(),
                    to: attack.victim.clone(),
                    weight: 1,
                });
            }
        }
        *victim_counts.entry(attack.victim.as_str()).or_default() += 1;
    }

    let max_received = victim_counts.values().copied().max().unwrap_or(0);

    let nodes = roster
        .iter()
        .map(|user| {
            let received = victim_counts.get(user.as_str()).copied().unwrap_or(0);
            Node {
                id: user.clone(),
                label: user.clone(),
                most_attacked: max_received > 0 && received == max_received,
            }
        })
        .collect();

    AttackGraph { nodes, edges }
}

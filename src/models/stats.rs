use serde::Serialize;

use crate::models::Attack;

/// Per-user tally of attacks made and received
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub username: String,
    #[serde(rename = "attacksMade")]
    pub attacks_made: usize,
    #[serde(rename = "attacksReceived")]
    pub attacks_received: usize,
}

/// Tally attacks per roster member and rank them: most attacked first, ties
/// broken by fewest attacks made. The sort is stable, so full ties keep
/// roster order.
pub fn compute_stats(roster: &[String], attacks: &[Attack]) -> Vec<UserStats> {
    let mut stats: Vec<UserStats> = roster
        .iter()
        .map(|user| UserStats {
            username: user.clone(),
            attacks_made: attacks.iter().filter(|a| &a.attacker == user).count(),
            attacks_received: attacks.iter().filter(|a| &a.victim == user).count(),
        })
        .collect();

    stats.sort_by(|a, b| {
        b.attacks_received
            .cmp(&a.attacks_received)
            .then(a.attacks_made.cmp(&b.attacks_made))
    });

    stats
}

/// Users with the highest received count, thinned to those who attacked the
/// least among them. Empty when nobody has been attacked at all.
pub fn most_attacked(stats: &[UserStats]) -> Vec<String> {
    let max_received = match stats.first() {
        Some(first) if first.attacks_received > 0 => first.attacks_received,
        _ => return Vec::new(),
    };

    let min_made = stats
        .iter()
        .filter(|s| s.attacks_received == max_received)
        .map(|s| s.attacks_made)
        .min()
        .unwrap_or(0);

    stats
        .iter()
        .filter(|s| s.attacks_received == max_received && s.attacks_made == min_made)
        .map(|s| s.username.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(attacker: &str, victim: &str) -> Attack {
        Attack {
            attacker: attacker.to_string(),
            victim: victim.to_string(),
            timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_ranking_and_tallies() {
        let roster = roster(&["alice", "bob", "carol"]);
        let attacks = vec![
            attack("alice", "bob"),
            attack("alice", "bob"),
            attack("carol", "bob"),
        ];

        let stats = compute_stats(&roster, &attacks);

        // bob leads on received; the zero-received tie ranks carol (1 made)
        // ahead of alice (2 made)
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].username, "bob");
        assert_eq!(stats[0].attacks_made, 0);
        assert_eq!(stats[0].attacks_received, 3);
        assert_eq!(stats[1].username, "carol");
        assert_eq!(stats[1].attacks_made, 1);
        assert_eq!(stats[1].attacks_received, 0);
        assert_eq!(stats[2].username, "alice");
        assert_eq!(stats[2].attacks_made, 2);
        assert_eq!(stats[2].attacks_received, 0);

        assert_eq!(most_attacked(&stats), vec!["bob"]);
    }

    #[test]
    fn test_full_ties_keep_roster_order() {
        let roster = roster(&["yuki", "ren", "sora"]);
        let stats = compute_stats(&roster, &[]);

        let names: Vec<&str> = stats.iter().map(|s| s.username.as_str()).collect();
        assert_eq!(names, vec!["yuki", "ren", "sora"]);
    }

    #[test]
    fn test_most_attacked_empty_without_attacks() {
        let stats = compute_stats(&roster(&["alice", "bob"]), &[]);
        assert!(most_attacked(&stats).is_empty());
    }

    #[test]
    fn test_most_attacked_empty_when_all_victims_off_roster() {
        // Orphaned attacks leave every roster member at zero received
        let stats = compute_stats(&roster(&["alice", "bob"]), &[attack("alice", "zed")]);
        assert!(most_attacked(&stats).is_empty());
    }

    #[test]
    fn test_most_attacked_tie_thinned_by_fewest_made() {
        let roster = roster(&["ann", "bob", "cho"]);
        let attacks = vec![
            attack("ann", "bob"),
            attack("ann", "bob"),
            attack("bob", "ann"),
            attack("cho", "ann"),
        ];

        let stats = compute_stats(&roster, &attacks);

        // ann and bob both received 2; bob made fewer attacks (1 vs 2)
        assert_eq!(most_attacked(&stats), vec!["bob"]);
    }

    #[test]
    fn test_most_attacked_keeps_equal_candidates() {
        let roster = roster(&["ann", "bob", "cho"]);
        let attacks = vec![
            attack("cho", "ann"),
            attack("bob", "ann"),
            attack("ann", "bob"),
            attack("cho", "bob"),
        ];

        let stats = compute_stats(&roster, &attacks);

        // both at 2 received / 1 made
        assert_eq!(most_attacked(&stats), vec!["ann", "bob"]);
    }

    #[test]
    fn test_wire_field_names() {
        let stats = compute_stats(&roster(&["ann"]), &[]);
        let json = serde_json::to_value(&stats[0]).unwrap();
        assert_eq!(json["username"], "ann");
        assert_eq!(json["attacksMade"], 0);
        assert_eq!(json["attacksReceived"], 0);
    }
}

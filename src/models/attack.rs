use serde::{Deserialize, Serialize};

/// One recorded attack between two roster members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub attacker: String,
    pub victim: String,
    pub timestamp: String,
}

impl Attack {
    /// Map one sheet row (attacker, victim, timestamp) to an attack.
    ///
    /// Rows missing any of the three cells are not attacks; cells past the
    /// third are ignored.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let attacker = row.first()?;
        let victim = row.get(1)?;
        let timestamp = row.get(2)?;

        if attacker.is_empty() || victim.is_empty() || timestamp.is_empty() {
            return None;
        }

        Some(Self {
            attacker: attacker.clone(),
            victim: victim.clone(),
            timestamp: timestamp.clone(),
        })
    }
}

pub mod attacks;
pub mod graph;
pub mod health;
pub mod stats;
pub mod teams;
pub mod users;
pub mod validation;

pub use attacks::{delete_attack, list_attacks, register_attack};
pub use graph::attack_graph;
pub use health::health_check;
pub use stats::team_stats;
pub use teams::{create_team, team_exists};
pub use users::{delete_user, list_users, register_user};
pub use validation::{require_field, require_team};

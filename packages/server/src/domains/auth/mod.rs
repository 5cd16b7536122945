// Authentication domain - JWT identity resolution and subscription tiers
pub mod jwt;
pub mod tier;

pub use jwt::{Claims, Identity, JwtService};
pub use tier::Tier;

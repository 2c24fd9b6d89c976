//! Identity boundary - JWT verification

mod jwt;

pub use jwt::{Claims, JwtService};

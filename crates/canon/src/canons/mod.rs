//! Built-in canon tables, one module per versification system.

pub mod catholic;
pub mod catholic2;
pub mod german;
pub mod kjv;
pub mod kjva;
pub mod leningrad;
pub mod luther;
pub mod lxx;
pub mod mt;
pub mod null;
pub mod nrsv;
pub mod nrsva;
pub mod orthodox;
pub mod rahlfs;
pub mod synodal;
pub mod vulg;

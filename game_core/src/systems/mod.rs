pub mod ai;
pub mod collision;
pub mod flash;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use flash::*;
pub use movement::*;
pub use scoring::*;

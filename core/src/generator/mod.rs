use crate::*;
pub use random::*;
pub use sampling::*;

mod random;
mod sampling;

pub trait RoundGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<RoundLayout>;
}

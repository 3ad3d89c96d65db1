pub mod stage0_normalize;
pub mod stage1_strategy;
pub mod stage2_concept;
pub mod stage3_outline;
pub mod stage4_draft;
pub mod stage5_distribution;
pub mod stage6_closing;

pub use stage0_normalize::*;
pub use stage1_strategy::*;
pub use stage2_concept::*;
pub use stage3_outline::*;
pub use stage4_draft::*;
pub use stage5_distribution::*;
pub use stage6_closing::*;

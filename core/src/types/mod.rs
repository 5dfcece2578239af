pub(crate) mod count;
pub use count::{Count, CountError};

pub(crate) mod options;
pub use options::{Order, RankingStrategy, TermMatch};

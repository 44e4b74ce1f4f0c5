mod aggregate;
mod balance;
mod compactness;
mod evaluate;

pub use aggregate::aggregate;
pub use balance::score_balance;
pub use compactness::score_compactness;
pub use evaluate::{Evaluation, evaluate};

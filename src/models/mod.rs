pub mod profit;
pub mod sales;

pub use profit::*;
pub use sales::*;

mod clock;
mod minter;
mod report;

pub use clock::SystemClock;
pub use minter::mint;
pub use report::TokenReport;

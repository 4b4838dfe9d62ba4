mod date;
mod price;
mod timestamp;

pub use date::Date;
pub use price::Price;
pub use timestamp::Timestamp;

mod ticker;

pub use ticker::Ticker;

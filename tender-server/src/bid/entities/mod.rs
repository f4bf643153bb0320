mod bid;
mod exchange_rate;
mod quote;
mod tender;

pub use {
    bid::*,
    exchange_rate::*,
    quote::*,
    tender::*,
};

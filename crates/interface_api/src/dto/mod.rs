//! Request and response bodies

pub mod switch;

mod common;

pub use common::{coerce_numeric, Cell, Column, Header};

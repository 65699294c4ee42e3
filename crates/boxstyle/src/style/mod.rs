//! Style primitives: prop values, the prop bag, and the resolved style.
//!
//! Input flows one way: a [`Props`] bag of [`PropValue`]s is read by the
//! composers, each value is borrowed as a [`RawValue`] and classified into a
//! [`Token`] by the resolvers, and the results land in a [`ResolvedStyle`].

mod props;
mod resolved;
mod value;

pub(crate) use value::format_number;

pub use props::Props;
pub use resolved::ResolvedStyle;
pub use value::{PropValue, RawValue, Token};

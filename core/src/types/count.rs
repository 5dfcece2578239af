use nutype::nutype;

/// A non-negative count or size limit.
///
/// Backed by `i32` because that is the integer width of the bundle handed to
/// the search engine. There is no upper bound.
#[nutype(
    validate(greater_or_equal = 0),
    default = 0,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Default,
        Display,
        TryFrom,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct Count(i32);

/// A step taken by the simplifier.
///
/// Each variant is named after the rule that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `a+(b+c) = a+b+c`
    FlattenAdd,

    /// `0+a = a`
    AddZero,

    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `a*(b*c) = a*b*c`
    FlattenMul,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `3/12 = 1/4`
    ReduceFraction,

    /// `a^b*a^c = a^(b+c)`
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    OnePower,

    /// `2^3 = 8`
    IntegerPower,

    /// `(a^b)^c = a^(b*c)`
    PowerOfPower,

    /// `(a+b)^2 = a*a + a*b + b*a + b*b`
    ExpandPower,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `(a*b)^c = a^c * b^c`
    DistributePower,
}

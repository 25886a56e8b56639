//! Rendering options passed to [crate::marshal_cfg].

/// How floating-point numbers with very large or very small magnitudes are written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Exponent {
    /// Use Wolfram scientific notation (`1.5*^-7`) when the decimal exponent is below `-4`
    /// or at least `21`, and plain decimals otherwise.
    #[default]
    Wolfram,

    /// Always write the full decimal expansion (`0.00000015`).
    Never,
}

impl Exponent {
    /// Smallest decimal exponent written without scientific notation.
    pub const MIN_PLAIN: i32 = -4;

    /// Largest decimal exponent (exclusive) written without scientific notation.
    pub const MAX_PLAIN: i32 = 21;

    /// Returns `true` if a number with decimal exponent `exp` should use scientific notation.
    pub fn is_scientific(&self, exp: i32) -> bool {
        match self {
            Self::Wolfram => !(Self::MIN_PLAIN..Self::MAX_PLAIN).contains(&exp),
            Self::Never => false,
        }
    }
}

/// Configuration for a single top-level encode.
///
/// # Examples
///
/// ```
/// use mathematica_codec::{marshal_cfg, Config, Exponent};
///
/// let cfg = Config {
///     exponent: Exponent::Never,
///     ..Config::default()
/// };
/// assert_eq!(marshal_cfg(&1.5e-7, &cfg).unwrap(), "0.00000015");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Config {
    /// Float exponent policy.
    pub exponent: Exponent,

    /// Maximum number of nested sequences and records.
    ///
    /// `None` places no bound on nesting, in which case the caller is responsible for not
    /// passing unboundedly deep values.
    pub max_depth: Option<usize>,
}

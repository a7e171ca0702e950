//! Multi-shape construction of quaternion values.
//!
//! Accepted shapes:
//!
//! | positional                 | meaning                                      |
//! |----------------------------|----------------------------------------------|
//! | none                       | zero                                         |
//! | up to four reals           | `scalar, i, j, k` in order, the rest zero    |
//! | one or two complex numbers | `(scalar, i)` then `(j, k)`                  |
//! | one quaternion             | copy (truncated for the integral type)       |
//! | one string                 | parsed text                                  |
//!
//! Named components (`scalar`, `i`, `j`, `k`) may be mixed with real
//! positional arguments as long as no component is given twice.

use core::fmt;
use core::str::FromStr;

use num_complex::Complex64;
use tracing::debug;

use super::{Quaternion, QuaternionicInteger};
use crate::error::{QuatResult, QuaternionError};
use crate::tower::Number;

const MAX_ARGUMENTS: usize = 4;

/// One of the four quaternion components, addressed by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Scalar,
    I,
    J,
    K,
}

impl Component {
    pub const ALL: [Component; 4] = [Component::Scalar, Component::I, Component::J, Component::K];

    pub fn index(self) -> usize {
        match self {
            Component::Scalar => 0,
            Component::I => 1,
            Component::J => 2,
            Component::K => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Scalar => "scalar",
            Component::I => "i",
            Component::J => "j",
            Component::K => "k",
        }
    }
}

impl FromStr for Component {
    type Err = QuaternionError;

    fn from_str(s: &str) -> QuatResult<Self> {
        Component::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| QuaternionError::UnknownComponent(s.to_string()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constructor argument: a number of any kind, or quaternion text.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Number(Number),
    Text(String),
}

impl Arg {
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Arg::Number(n) => Some(*n),
            Arg::Text(_) => None,
        }
    }
}

macro_rules! numeric_arg {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Number(Number::from(value))
            }
        }
    )*};
}

numeric_arg!(i32, i64, f64, Complex64, Quaternion, QuaternionicInteger, Number);

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

// Integers stay exact until the target type is known.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Slot {
    Exact(i64),
    Float(f64),
}

impl Slot {
    fn to_f64(self) -> f64 {
        match self {
            Slot::Exact(n) => n as f64,
            Slot::Float(x) => x,
        }
    }

    fn truncate(self) -> i64 {
        match self {
            Slot::Exact(n) => n,
            Slot::Float(x) => x as i64,
        }
    }
}

fn real_slot(arg: &Arg) -> Option<Slot> {
    match arg {
        Arg::Number(Number::Integer(n)) => Some(Slot::Exact(*n)),
        Arg::Number(Number::Real(x)) => Some(Slot::Float(*x)),
        _ => None,
    }
}

fn complex_value(arg: &Arg) -> Option<Complex64> {
    match arg {
        Arg::Number(Number::Integer(n)) => Some(Complex64::new(*n as f64, 0.0)),
        Arg::Number(Number::Real(x)) => Some(Complex64::new(*x, 0.0)),
        Arg::Number(Number::Complex(c)) => Some(*c),
        _ => None,
    }
}

/// Collects positional and named arguments, then validates them together.
///
/// ```
/// use quaternionic::{Component, Quaternion};
///
/// let q = Quaternion::builder()
///     .arg(1.5)
///     .named(Component::K, -2)
///     .build()
///     .unwrap();
/// assert_eq!(q, Quaternion::new(1.5, 0.0, 0.0, -2.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuaternionBuilder {
    positional: Vec<Arg>,
    named: Vec<(Component, Arg)>,
}

impl QuaternionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn args<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn named(mut self, component: Component, value: impl Into<Arg>) -> Self {
        self.named.push((component, value.into()));
        self
    }

    /// Like [`QuaternionBuilder::named`], resolving the component by name.
    pub fn named_str(self, name: &str, value: impl Into<Arg>) -> QuatResult<Self> {
        let component = name.parse()?;
        Ok(self.named(component, value))
    }

    pub fn build(&self) -> QuatResult<Quaternion> {
        let slots = self.resolve()?;
        Ok(Quaternion::from_components(slots.map(Slot::to_f64)))
    }

    /// Builds an integral quaternion; floating components truncate toward zero.
    pub fn build_integer(&self) -> QuatResult<QuaternionicInteger> {
        let slots = self.resolve()?;
        Ok(QuaternionicInteger::from_components(slots.map(Slot::truncate)))
    }

    fn resolve(&self) -> QuatResult<[Slot; 4]> {
        let total = self.positional.len() + self.named.len();
        if total > MAX_ARGUMENTS {
            return Err(QuaternionError::ArgumentCount(format!(
                "at most {MAX_ARGUMENTS} arguments are accepted, {total} given"
            )));
        }

        let mut slots = [Slot::Exact(0); 4];
        if let Some(first) = self.positional.first() {
            match first {
                Arg::Number(Number::Integer(_) | Number::Real(_)) => {
                    for (slot, arg) in slots.iter_mut().zip(&self.positional) {
                        *slot = real_slot(arg).ok_or_else(|| {
                            QuaternionError::ArgumentType(
                                "arguments after a real first argument must also be real".into(),
                            )
                        })?;
                    }
                }
                Arg::Number(Number::Complex(c)) => {
                    slots[0] = Slot::Float(c.re);
                    slots[1] = Slot::Float(c.im);
                    if let Some(second) = self.positional.get(1) {
                        let c2 = complex_value(second).ok_or_else(|| {
                            QuaternionError::ArgumentType(
                                "the argument after a complex first argument must be complex"
                                    .into(),
                            )
                        })?;
                        slots[2] = Slot::Float(c2.re);
                        slots[3] = Slot::Float(c2.im);
                    }
                    if self.positional.len() > 2 {
                        return Err(QuaternionError::ArgumentCount(
                            "a complex first argument takes at most one more complex argument"
                                .into(),
                        ));
                    }
                }
                Arg::Number(Number::Quaternion(q)) => {
                    self.sole_argument("a quaternion")?;
                    slots = q.to_list().map(Slot::Float);
                }
                Arg::Number(Number::QuaternionicInteger(q)) => {
                    self.sole_argument("a quaternionic integer")?;
                    slots = q.to_list().map(Slot::Exact);
                }
                Arg::Text(text) => {
                    self.sole_argument("quaternion text")?;
                    let q: Quaternion = text.parse()?;
                    slots = q.to_list().map(Slot::Float);
                }
            }
        }

        if !self.named.is_empty() {
            self.apply_named(&mut slots)?;
        }
        Ok(slots)
    }

    // Named components are left to `apply_named`, which rejects them as a type error.
    fn sole_argument(&self, what: &str) -> QuatResult<()> {
        if self.positional.len() > 1 {
            debug!(
                positional = self.positional.len(),
                "rejected extra arguments after {what}"
            );
            return Err(QuaternionError::ArgumentCount(format!(
                "{what} must be the only argument"
            )));
        }
        Ok(())
    }

    fn apply_named(&self, slots: &mut [Slot; 4]) -> QuatResult<()> {
        if self.positional.iter().any(|arg| real_slot(arg).is_none()) {
            return Err(QuaternionError::ArgumentType(
                "named components require every positional argument to be real".into(),
            ));
        }

        let mut seen = [false; 4];
        for (component, value) in &self.named {
            let slot = real_slot(value).ok_or_else(|| {
                QuaternionError::ArgumentType(format!("component `{component}` must be real"))
            })?;
            let index = component.index();
            if index < self.positional.len() {
                return Err(QuaternionError::ArgumentType(format!(
                    "component `{component}` given both by position and by name"
                )));
            }
            if seen[index] {
                return Err(QuaternionError::ArgumentType(format!(
                    "component `{component}` named more than once"
                )));
            }
            seen[index] = true;
            slots[index] = slot;
        }
        Ok(())
    }
}

fn collect_named<I, K, T>(pairs: I) -> QuatResult<QuaternionBuilder>
where
    I: IntoIterator<Item = (K, T)>,
    K: AsRef<str>,
    T: Into<Arg>,
{
    pairs
        .into_iter()
        .try_fold(QuaternionBuilder::new(), |builder, (name, value)| {
            builder.named_str(name.as_ref(), value)
        })
}

impl Quaternion {
    pub fn builder() -> QuaternionBuilder {
        QuaternionBuilder::new()
    }

    /// Positional construction from any sequence of arguments.
    pub fn from_iterable<I, T>(values: I) -> QuatResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        QuaternionBuilder::new().args(values).build()
    }

    /// Named construction from `(component name, value)` pairs.
    pub fn from_mapping<I, K, T>(pairs: I) -> QuatResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Into<Arg>,
    {
        collect_named(pairs)?.build()
    }
}

impl QuaternionicInteger {
    pub fn builder() -> QuaternionBuilder {
        QuaternionBuilder::new()
    }

    pub fn from_iterable<I, T>(values: I) -> QuatResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Arg>,
    {
        QuaternionBuilder::new().args(values).build_integer()
    }

    pub fn from_mapping<I, K, T>(pairs: I) -> QuatResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Into<Arg>,
    {
        collect_named(pairs)?.build_integer()
    }
}

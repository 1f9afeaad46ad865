//! Statically typed combinators for ordinary Rust closures.
//!
//! These mirror the dynamic [`curry`](crate::curry), [`pipe`](crate::pipe())
//! and [`compose`](crate::compose()) but let the compiler check every stage,
//! at the cost of a fixed shape known at compile time.

/// Composes functions left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`.
///
/// ```
/// use pointfree_kernel::pipe;
///
/// let f = pipe!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(f(3), 8);
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// ```
/// use pointfree_kernel::compose;
///
/// let f = compose!(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(f(3), 8);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($inner_functions),+);
        move |input| outer(inner(input))
    }};
}

/// Curries a two-argument function.
///
/// Partial applications can be called repeatedly, so the first argument
/// must be `Clone`.
///
/// ```
/// use pointfree_kernel::curry2;
///
/// let add = curry2!(|a: i32, b: i32| a + b);
/// let add_ten = add(10);
/// assert_eq!(add_ten(1), 11);
/// assert_eq!(add_ten(2), 12);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// ```
/// use pointfree_kernel::curry3;
///
/// let sum = curry3!(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum(2)(3)(4), 9);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::core::clone::Clone::clone(&first),
                        ::core::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Sequences two functions: `then(f, g)(x) == g(f(x))`.
pub fn then<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

/// Method-style application: `x.pipe(f) == f(x)`.
pub trait Pipe: Sized {
    fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_macro_runs_left_to_right() {
        let f = crate::pipe!(|x: i32| x + 1, |x: i32| x * 2, |x: i32| x - 3);
        assert_eq!(f(3), 5);
    }

    #[test]
    fn compose_macro_runs_right_to_left() {
        let f = crate::compose!(|x: i32| x - 3, |x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(f(3), 5);
    }

    #[test]
    fn single_function_passes_through() {
        let f = crate::pipe!(|x: i32| x * 10);
        let g = crate::compose!(|x: i32| x * 10);
        assert_eq!(f(2), g(2));
    }

    #[test]
    fn stages_may_change_types() {
        let describe = crate::pipe!(
            |s: &str| s.len(),
            |n: usize| n * 2,
            |n: usize| format!("{n} chars")
        );
        assert_eq!(describe("hooray"), "12 chars");
    }

    #[test]
    fn curried_partials_are_reusable() {
        let greet = crate::curry2!(|greeting: String, name: &str| format!("{greeting}, {name}"));
        let hello = greet("Hello".to_string());
        assert_eq!(hello("ada"), "Hello, ada");
        assert_eq!(hello("grace"), "Hello, grace");
    }

    #[test]
    fn curry3_matches_uncurried_call() {
        let sum = |a: i32, b: i32, c: i32| a + b + c;
        let curried = crate::curry3!(sum);
        assert_eq!(curried(2)(3)(4), sum(2, 3, 4));
    }

    #[test]
    fn then_sequences_two_functions() {
        let len_then_double = then(|s: String| s.len(), |n: usize| n * 2);
        assert_eq!(len_then_double("Hooray!".to_string()), 14);
    }

    #[test]
    fn pipe_method_applies_function() {
        assert_eq!(5_i32.pipe(|x| x * 2), 10);
        assert_eq!("hello".pipe(str::to_uppercase), "HELLO");
    }
}

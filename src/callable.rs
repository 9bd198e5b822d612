//! Callable objects and closure storage.

use std::{cmp::Ordering, fmt::Debug};

use dyn_clone::DynClone;

/**
 * Unary test over `T`. Implemented by any `Fn(&T) -> bool` closure and by
 * hand-written structs such as `CanDivide`.
 */
pub trait Predicate<T> {
    fn test(&self, x: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, x: &T) -> bool {
        self(x)
    }
}

/**
 * Strict "less than" relation over `T`.
 */
pub trait Comparator<T> {
    fn less(&self, x: &T, y: &T) -> bool;

    /**
     * Total ordering derived from `less`. Pairs where neither side is less compare equal.
     */
    fn ordering(&self, x: &T, y: &T) -> Ordering {
        if self.less(x, y) {
            Ordering::Less
        } else if self.less(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, x: &T, y: &T) -> bool {
        self(x, y)
    }
}

/// Divisibility test holding its divisor.
#[derive(Debug, Clone, Copy)]
pub struct CanDivide {
    n: i32,
}

impl CanDivide {
    /**
     * Panics if `n` is zero.
     */
    pub fn new(n: i32) -> Self {
        assert!(n != 0, "divisor must be non-zero");
        CanDivide { n }
    }
}

impl Predicate<i32> for CanDivide {
    // If can divide, return true
    fn test(&self, x: &i32) -> bool {
        x % self.n == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AbsLess;

impl Comparator<i32> for AbsLess {
    fn less(&self, x: &i32, y: &i32) -> bool {
        x.unsigned_abs() < y.unsigned_abs()
    }
}

/**
 * First element of `seq` accepted by `pred`, in sequence order.
 */
pub fn find_if<T: Copy>(seq: &[T], pred: impl Predicate<T>) -> Option<T> {
    seq.iter().copied().find(|x| pred.test(x))
}

/**
 * Sorts `seq` in place by `cmp`. Not stable: elements comparing equal end up in any order.
 */
pub fn sort_by_less<T>(seq: &mut [T], cmp: impl Comparator<T>) {
    seq.sort_unstable_by(|x, y| cmp.ordering(x, y));
}

/**
 * Object-safe call interface behind `Function`. Must be clonable so a stored
 * callable can be duplicated.
 */
pub trait Callable<A: ?Sized, R>: DynClone {
    fn call(&self, arg: &A) -> R;
}

impl<A: ?Sized, R, F> Callable<A, R> for F
where
    F: Fn(&A) -> R + Clone,
{
    fn call(&self, arg: &A) -> R {
        self(arg)
    }
}

/**
 * Clonable, type-erased storage for a callable taking `&A` and returning `R`.
 */
pub struct Function<A: ?Sized, R> {
    func: Box<dyn Callable<A, R>>,
}

impl<A: ?Sized, R> Clone for Function<A, R> {
    fn clone(&self) -> Self {
        Self {
            func: dyn_clone::clone_box(&*self.func),
        }
    }
}

impl<A: ?Sized, R> Debug for Function<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("func", &"Callable").finish()
    }
}

impl<A: ?Sized, R> Function<A, R> {
    /**
     * Stores any clonable callable, usually a closure.
     */
    pub fn new(f: impl Callable<A, R> + 'static) -> Self {
        Function { func: Box::new(f) }
    }

    pub fn call(&self, arg: &A) -> R {
        self.func.call(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::{find_if, sort_by_less, AbsLess, CanDivide, Comparator, Function, Predicate};
    use std::cmp::Ordering;

    const INPUT: [i32; 10] = [9, 7, 5, 3, 1, -2, -4, -6, -8, 0];

    #[test]
    fn can_divide_matches_closure() {
        let n = 3;
        let object = CanDivide::new(n);
        let closure = move |x: &i32| x % n == 0;
        for x in INPUT {
            assert_eq!(object.test(&x), closure.test(&x));
        }
    }

    #[test]
    #[should_panic(expected = "divisor must be non-zero")]
    fn can_divide_rejects_zero() {
        CanDivide::new(0);
    }

    #[test]
    fn find_if_returns_first_match() {
        assert_eq!(find_if(&INPUT, CanDivide::new(4)), Some(-4));
        assert_eq!(find_if(&INPUT, CanDivide::new(1)), Some(9));
        assert_eq!(find_if(&INPUT, |x: &i32| *x > 100), None);
        assert_eq!(find_if(&[] as &[i32], CanDivide::new(2)), None);
    }

    #[test]
    fn abs_less_ties_compare_equal() {
        assert!(AbsLess.less(&1, &-2));
        assert!(!AbsLess.less(&-2, &1));
        assert_eq!(AbsLess.ordering(&2, &-2), Ordering::Equal);
        assert_eq!(AbsLess.ordering(&-2, &2), Ordering::Equal);
        assert_eq!(AbsLess.ordering(&i32::MIN, &i32::MAX), Ordering::Greater);
    }

    #[test]
    fn sort_by_less_orders_magnitudes() {
        let mut with_object = INPUT;
        sort_by_less(&mut with_object, AbsLess);
        assert_eq!(with_object, [0, 1, -2, 3, -4, 5, -6, 7, -8, 9]);

        let mut with_closure = [3, -3, 1, -1, 0, 2];
        sort_by_less(&mut with_closure, |x: &i32, y: &i32| x.abs() < y.abs());
        let magnitudes: Vec<i32> = with_closure.iter().map(|x| x.abs()).collect();
        assert_eq!(magnitudes, vec![0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn stored_function_is_reusable() {
        let polite: Function<str, String> = Function::new(|s: &str| s.to_string() + " SIR ");
        assert_eq!(polite.call("Ben"), "Ben SIR ");
        assert_eq!(polite.call("Ben"), "Ben SIR ");
        assert_eq!(polite.call("Bingshiue"), "Bingshiue SIR ");
    }

    #[test]
    fn cloned_function_keeps_captures() {
        let suffix = String::from("!");
        let shout: Function<str, String> = Function::new(move |s: &str| s.to_uppercase() + &suffix);
        let cloned = shout.clone();
        drop(shout);
        assert_eq!(cloned.call("hi"), "HI!");
        assert_eq!(format!("{:?}", cloned), "Function { func: \"Callable\" }");
    }
}
